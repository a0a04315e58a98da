use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::graph::GraphError;

/// Index of a vertex in the graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

/// The partition a vertex belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    Album,
    Genre,
    Characteristic,
}

impl VertexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexKind::Album => "album",
            VertexKind::Genre => "genre",
            VertexKind::Characteristic => "characteristic",
        }
    }
}

impl Display for VertexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VertexKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "album" => Ok(VertexKind::Album),
            "genre" => Ok(VertexKind::Genre),
            "characteristic" => Ok(VertexKind::Characteristic),
            other => Err(GraphError::InvalidKind(other.to_string())),
        }
    }
}

/// A labeled node of the album graph
///
/// Neighbours are stored as arena ids; only the graph mutates them so that
/// adjacency stays symmetric.
#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
    kind: VertexKind,
    neighbours: HashSet<VertexId>,
}

impl Vertex {
    /// Creates an isolated vertex
    pub fn new(label: impl Into<String>, kind: VertexKind) -> Self {
        Self {
            label: label.into(),
            kind,
            neighbours: HashSet::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    pub fn neighbours(&self) -> &HashSet<VertexId> {
        &self.neighbours
    }

    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    pub(crate) fn link(&mut self, other: VertexId) -> bool {
        self.neighbours.insert(other)
    }
}
