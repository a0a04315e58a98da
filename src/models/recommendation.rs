use serde::{Deserialize, Serialize};

/// An album suggested for a listener
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Album label ("{title} by {artist}")
    pub album: String,
    /// How many of the requested characteristics the album has
    pub similarity: usize,
    /// Combined user/critic rating, 0 when the dataset had none
    pub rating: u8,
}

/// What a listener asks for
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListenerPreferences {
    pub genre: String,
    pub characteristics: Vec<String>,
}

impl ListenerPreferences {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            characteristics: Vec::new(),
        }
    }

    /// Adds a characteristic, ignoring blanks and repeats
    pub fn add_characteristic(&mut self, characteristic: &str) {
        let characteristic = characteristic.trim();
        if characteristic.is_empty() {
            return;
        }
        if !self.characteristics.iter().any(|c| c == characteristic) {
            self.characteristics.push(characteristic.to_string());
        }
    }
}
