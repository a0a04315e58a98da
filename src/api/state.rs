use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::AlbumGraph;
use crate::services::recommendations::DEFAULT_LIMIT;

/// Shared application state
///
/// The graph is built before the server starts and handlers only take read
/// guards, so the lock guards the whole graph as one unit.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<RwLock<AlbumGraph>>,
    pub max_results: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AlbumGraph::new(), DEFAULT_LIMIT)
    }
}

impl AppState {
    /// Wraps an already built graph
    pub fn new(graph: AlbumGraph, max_results: usize) -> Self {
        Self {
            graph: Arc::new(RwLock::new(graph)),
            max_results,
        }
    }
}
