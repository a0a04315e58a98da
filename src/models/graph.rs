use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::similarity::{overlap, SimilarityList};
use super::vertex::{Vertex, VertexId, VertexKind};

/// Highest rating an album can hold
pub const MAX_SCORE: u8 = 100;

/// Error types for graph construction and queries
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid vertex kind: {0}")]
    InvalidKind(String),
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
    #[error("Vertex cannot be adjacent to itself: {0}")]
    SelfLoop(String),
    #[error("Vertex {label} is a {found}, expected {expected}")]
    KindMismatch {
        label: String,
        expected: VertexKind,
        found: VertexKind,
    },
}

/// Tri-partite graph of albums, genres and characteristics
///
/// Vertices live in an arena addressed by [`VertexId`] and are looked up by
/// label through a single index shared by every kind. Queries return labels in
/// the order their vertices were added, which keeps downstream ranking
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct AlbumGraph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    scores: HashMap<String, u8>,
    edge_count: usize,
}

impl AlbumGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex, doing nothing if the label is already present
    pub fn add_vertex(&mut self, label: &str, kind: VertexKind) -> VertexId {
        if let Some(&id) = self.index.get(label) {
            let existing = self.vertices[id.0].kind();
            if existing != kind {
                tracing::debug!(
                    label = %label,
                    existing = %existing,
                    requested = %kind,
                    "Label already used by a vertex of another kind"
                );
            }
            return id;
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(label, kind));
        self.index.insert(label.to_string(), id);
        id
    }

    /// Connects two existing vertices
    ///
    /// Adding an edge that already exists leaves the graph unchanged.
    pub fn add_edge(&mut self, label1: &str, label2: &str) -> Result<(), GraphError> {
        if label1 == label2 {
            return Err(GraphError::SelfLoop(label1.to_string()));
        }
        let a = self.id_of(label1)?;
        let b = self.id_of(label2)?;

        // Both ids are valid and distinct, so neither insertion can fail halfway
        let inserted = self.vertices[a.0].link(b);
        self.vertices[b.0].link(a);
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Returns whether an edge joins the two labels; unknown labels are never adjacent
    pub fn adjacent(&self, label1: &str, label2: &str) -> bool {
        match (self.index.get(label1), self.index.get(label2)) {
            (Some(a), Some(b)) => self.vertices[a.0].neighbours().contains(b),
            _ => false,
        }
    }

    /// Returns the labels adjacent to `label`, optionally restricted to one kind
    pub fn get_neighbours(
        &self,
        label: &str,
        kind: Option<VertexKind>,
    ) -> Result<Vec<&str>, GraphError> {
        let id = self.id_of(label)?;
        let mut ids: Vec<VertexId> = self.vertices[id.0].neighbours().iter().copied().collect();
        ids.sort_unstable();

        Ok(ids
            .into_iter()
            .map(|n| &self.vertices[n.0])
            .filter(|v| kind.map_or(true, |k| v.kind() == k))
            .map(Vertex::label)
            .collect())
    }

    /// Returns every label in the graph, optionally restricted to one kind
    pub fn get_all_vertices(&self, kind: Option<VertexKind>) -> Vec<&str> {
        self.vertices
            .iter()
            .filter(|v| kind.map_or(true, |k| v.kind() == k))
            .map(Vertex::label)
            .collect()
    }

    /// Scores each album by how many of the desired characteristics it is adjacent to
    ///
    /// Every album appears in the result, in the order given, even when it
    /// matches nothing. Desired labels that are not characteristic vertices
    /// never match.
    pub fn get_similarity_list<A, D>(
        &self,
        album_labels: &[A],
        desired_characteristics: &[D],
    ) -> Result<SimilarityList, GraphError>
    where
        A: AsRef<str>,
        D: AsRef<str>,
    {
        let desired: HashSet<VertexId> = desired_characteristics
            .iter()
            .filter_map(|label| self.index.get(label.as_ref()).copied())
            .filter(|id| self.vertices[id.0].kind() == VertexKind::Characteristic)
            .collect();

        let mut list = SimilarityList::with_capacity(album_labels.len());
        for album in album_labels {
            let album = album.as_ref();
            let id = self.id_of(album)?;
            list.push(album, overlap(self.vertices[id.0].neighbours(), &desired));
        }
        Ok(list)
    }

    /// Returns the stored rating of an album
    pub fn score(&self, album: &str) -> Option<u8> {
        self.scores.get(album).copied()
    }

    /// Stores an album rating, clamped to [`MAX_SCORE`], returning the previous one
    pub fn set_score(&mut self, album: &str, score: u8) -> Result<Option<u8>, GraphError> {
        let id = self.id_of(album)?;
        let found = self.vertices[id.0].kind();
        if found != VertexKind::Album {
            return Err(GraphError::KindMismatch {
                label: album.to_string(),
                expected: VertexKind::Album,
                found,
            });
        }
        Ok(self.scores.insert(album.to_string(), score.min(MAX_SCORE)))
    }

    /// All stored album ratings
    pub fn scores(&self) -> &HashMap<String, u8> {
        &self.scores
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn kind_of(&self, label: &str) -> Option<VertexKind> {
        self.vertex(label).map(Vertex::kind)
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.index.get(label).map(|id| &self.vertices[id.0])
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn id_of(&self, label: &str) -> Result<VertexId, GraphError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }
}
