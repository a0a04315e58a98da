pub mod album;
pub mod graph;
pub mod recommendation;
pub mod similarity;
pub mod vertex;

pub use album::{AlbumRecord, Review};
pub use graph::{AlbumGraph, GraphError};
pub use recommendation::{ListenerPreferences, Recommendation};
pub use similarity::{AlbumSimilarity, SimilarityList};
pub use vertex::{Vertex, VertexId, VertexKind};
