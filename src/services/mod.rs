pub mod dataset;
pub mod ranking;
pub mod recommendations;

pub use dataset::load_album_graph;
pub use recommendations::{RecommendationError, Recommender};
