use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::vertex::VertexId;

/// Number of desired vertices present in a neighbour set
pub fn overlap(neighbours: &HashSet<VertexId>, desired: &HashSet<VertexId>) -> usize {
    let (small, large) = if desired.len() <= neighbours.len() {
        (desired, neighbours)
    } else {
        (neighbours, desired)
    };
    small.iter().filter(|id| large.contains(id)).count()
}

/// Similarity score of one album
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumSimilarity {
    pub album: String,
    pub score: usize,
}

/// Album → similarity mapping that remembers the order albums were scored in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimilarityList {
    entries: Vec<AlbumSimilarity>,
    positions: HashMap<String, usize>,
}

impl SimilarityList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Records a score; an album scored twice keeps its first position
    pub fn push(&mut self, album: &str, score: usize) {
        if let Some(&pos) = self.positions.get(album) {
            self.entries[pos].score = score;
            return;
        }
        self.positions.insert(album.to_string(), self.entries.len());
        self.entries.push(AlbumSimilarity {
            album: album.to_string(),
            score,
        });
    }

    pub fn get(&self, album: &str) -> Option<usize> {
        self.positions.get(album).map(|&pos| self.entries[pos].score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.album.as_str(), e.score))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<AlbumSimilarity> {
        self.entries
    }
}
