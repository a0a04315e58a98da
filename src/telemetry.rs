use tracing_subscriber::EnvFilter;

/// Filter used by the HTTP server when `RUST_LOG` is unset
pub const SERVER_FILTER: &str = "album_recommender=info,tower_http=info";
/// Filter used by the interactive prompt when `RUST_LOG` is unset
pub const PROMPT_FILTER: &str = "album_recommender=warn";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` or `default_filter`
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
