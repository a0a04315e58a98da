pub mod api;
pub mod config;
pub mod error;
pub mod interactive;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AlbumGraph, GraphError, VertexKind};
