use thiserror::Error;

use crate::models::{AlbumGraph, GraphError, ListenerPreferences, Recommendation, VertexKind};

use super::ranking::rank;

/// Number of albums returned when the caller does not say otherwise
pub const DEFAULT_LIMIT: usize = 10;

/// Error types for the recommendation flow
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    #[error("At least one characteristic is required")]
    NoCharacteristics,
    #[error("No albums found for genre: {0}")]
    NoAlbums(String),
    #[error("None of the requested characteristics appear in any review")]
    NoKnownCharacteristics,
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Generates album recommendations from a listener's genre and characteristics
///
/// Candidates are the albums tagged with the genre. Requested characteristics
/// that no review mentions are dropped before scoring, and candidates are
/// ranked by how many of the remaining ones they share.
pub struct Recommender<'a> {
    graph: &'a AlbumGraph,
    limit: usize,
}

impl<'a> Recommender<'a> {
    pub fn new(graph: &'a AlbumGraph) -> Self {
        Self {
            graph,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Requested characteristics that exist as characteristic vertices, in request order
    pub fn known_characteristics<'p>(&self, requested: &'p [String]) -> Vec<&'p str> {
        requested
            .iter()
            .map(String::as_str)
            .filter(|c| self.graph.kind_of(c) == Some(VertexKind::Characteristic))
            .collect()
    }

    /// Albums tagged with the genre, in dataset order
    pub fn candidates(&self, genre: &str) -> Result<Vec<&'a str>, RecommendationError> {
        let genre = genre.trim();
        if self.graph.kind_of(genre) != Some(VertexKind::Genre) {
            return Err(RecommendationError::NoAlbums(genre.to_string()));
        }
        let albums = self.graph.get_neighbours(genre, Some(VertexKind::Album))?;
        if albums.is_empty() {
            return Err(RecommendationError::NoAlbums(genre.to_string()));
        }
        Ok(albums)
    }

    pub fn recommend(
        &self,
        preferences: &ListenerPreferences,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        if preferences.characteristics.is_empty() {
            return Err(RecommendationError::NoCharacteristics);
        }

        let albums = self.candidates(&preferences.genre)?;
        let desired = self.known_characteristics(&preferences.characteristics);
        if desired.is_empty() {
            return Err(RecommendationError::NoKnownCharacteristics);
        }

        tracing::debug!(
            genre = %preferences.genre.trim(),
            candidates = albums.len(),
            characteristics = desired.len(),
            "Scoring candidate albums"
        );

        let similarity = self.graph.get_similarity_list(&albums[..], &desired[..])?;
        let recommendations: Vec<Recommendation> = rank(similarity, self.limit)
            .into_iter()
            .map(|entry| Recommendation {
                rating: self.graph.score(&entry.album).unwrap_or(0),
                album: entry.album,
                similarity: entry.score,
            })
            .collect();

        tracing::info!(
            genre = %preferences.genre.trim(),
            returned = recommendations.len(),
            "Recommendations generated"
        );

        Ok(recommendations)
    }
}
