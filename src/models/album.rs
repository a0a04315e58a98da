use serde::{Deserialize, Serialize};

use super::graph::MAX_SCORE;

/// Artist used when a record has none
pub const UNKNOWN_ARTIST: &str = "unknown artist";
/// Title used when a record has none
pub const UNNAMED_ALBUM: &str = "*unnamed album*";

/// One album record of the review dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumRecord {
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_score: Option<f64>,
    #[serde(default)]
    pub critic_score: Option<f64>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A critic or user review, reduced to its extracted keywords
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl AlbumRecord {
    /// Graph label of the album: "{title} by {artist}"
    pub fn label(&self) -> String {
        let title = self.title.as_deref().unwrap_or(UNNAMED_ALBUM);
        let artist = self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST);
        format!("{} by {}", title, artist)
    }

    /// Combined rating of the album
    ///
    /// Both ratings are truncated to integers first. With both present the
    /// result is their floored average, with one present it is that value,
    /// and with neither it is 0.
    pub fn score(&self) -> u8 {
        let user = self.user_score.map(truncate);
        let critic = self.critic_score.map(truncate);
        let combined = match (user, critic) {
            (Some(u), Some(c)) => u.saturating_add(c).div_euclid(2),
            (Some(u), None) => u,
            (None, Some(c)) => c,
            (None, None) => 0,
        };
        combined.clamp(0, i64::from(MAX_SCORE)) as u8
    }

    /// Every keyword across the record's reviews, in review order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.reviews
            .iter()
            .flat_map(|review| review.keywords.iter().map(String::as_str))
    }
}

fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: Option<f64>, critic: Option<f64>) -> AlbumRecord {
        AlbumRecord {
            user_score: user,
            critic_score: critic,
            ..Default::default()
        }
    }

    #[test]
    fn test_score_both_present() {
        assert_eq!(record(Some(80.0), Some(90.0)).score(), 85);
        // Floor of 84.5
        assert_eq!(record(Some(80.0), Some(89.0)).score(), 84);
        // Truncation happens before averaging
        assert_eq!(record(Some(80.9), Some(89.9)).score(), 84);
    }

    #[test]
    fn test_score_single_value() {
        assert_eq!(record(None, Some(70.0)).score(), 70);
        assert_eq!(record(Some(62.0), None).score(), 62);
    }

    #[test]
    fn test_score_missing() {
        assert_eq!(record(None, None).score(), 0);
    }

    #[test]
    fn test_score_clamped() {
        assert_eq!(record(Some(150.0), None).score(), 100);
        assert_eq!(record(Some(-5.0), None).score(), 0);
    }

    #[test]
    fn test_score_extreme_values_saturate() {
        assert_eq!(record(Some(1e20), Some(1e20)).score(), 100);
        assert_eq!(record(Some(-1e20), Some(-1e20)).score(), 0);
        assert_eq!(record(Some(f64::MAX), Some(f64::MIN)).score(), 0);
    }

    #[test]
    fn test_label() {
        let mut r = AlbumRecord {
            artist: Some("Radiohead".to_string()),
            title: Some("OK Computer".to_string()),
            ..Default::default()
        };
        assert_eq!(r.label(), "OK Computer by Radiohead");

        r.artist = None;
        assert_eq!(r.label(), "OK Computer by unknown artist");

        r.title = None;
        assert_eq!(r.label(), "*unnamed album* by unknown artist");
    }

    #[test]
    fn test_deserialize_nulls_and_missing_fields() {
        let json = r#"{
            "artist": null,
            "title": "Blue",
            "user_score": 87,
            "critic_score": null,
            "genre": ["folk"]
        }"#;
        let r: AlbumRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.artist, None);
        assert_eq!(r.title.as_deref(), Some("Blue"));
        assert_eq!(r.user_score, Some(87.0));
        assert_eq!(r.genre, vec!["folk".to_string()]);
        assert!(r.reviews.is_empty());
        assert_eq!(r.score(), 87);
    }

    #[test]
    fn test_keywords_flatten_reviews() {
        let r = AlbumRecord {
            reviews: vec![
                Review {
                    keywords: vec!["raw".to_string(), "catchy".to_string()],
                },
                Review { keywords: vec![] },
                Review {
                    keywords: vec!["catchy".to_string()],
                },
            ],
            ..Default::default()
        };
        let keywords: Vec<&str> = r.keywords().collect();
        assert_eq!(keywords, vec!["raw", "catchy", "catchy"]);
    }
}
