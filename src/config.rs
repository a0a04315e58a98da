use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the JSON review dataset
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// How many albums a recommendation returns at most
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_dataset_path() -> String {
    "album_data.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_results() -> usize {
    crate::services::recommendations::DEFAULT_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            host: default_host(),
            port: default_port(),
            max_results: default_max_results(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_pairs<I>(pairs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(pairs)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Configuration for the prompt binary
    ///
    /// A dataset path given on the command line wins over `DATASET_PATH`, and
    /// then unreadable settings fall back to defaults since the prompt binds
    /// no socket.
    pub fn for_prompt(dataset_arg: Option<String>) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::for_prompt_from_pairs(std::env::vars(), dataset_arg)
    }

    pub fn for_prompt_from_pairs<I>(pairs: I, dataset_arg: Option<String>) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let Some(path) = dataset_arg else {
            return Self::from_pairs(pairs);
        };
        let mut config = Self::from_pairs(pairs).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring environment settings");
            Self::default()
        });
        config.dataset_path = path;
        Ok(config)
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
