use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{AlbumSimilarity, ListenerPreferences, Recommendation, VertexKind};
use crate::services::Recommender;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct AlbumsQuery {
    pub genre: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumResponse {
    pub album: String,
    pub rating: u8,
}

#[derive(Debug, Deserialize)]
pub struct NeighboursQuery {
    pub label: String,
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NeighboursResponse {
    pub label: String,
    pub kind: VertexKind,
    pub neighbours: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub albums: Vec<String>,
    pub characteristics: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub genre: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
    pub limit: Option<usize>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// List every genre
pub async fn get_genres(State(state): State<AppState>) -> Json<Vec<String>> {
    list_kind(&state, VertexKind::Genre).await
}

/// List every review characteristic
pub async fn get_characteristics(State(state): State<AppState>) -> Json<Vec<String>> {
    list_kind(&state, VertexKind::Characteristic).await
}

async fn list_kind(state: &AppState, kind: VertexKind) -> Json<Vec<String>> {
    let graph = state.graph.read().await;
    Json(
        graph
            .get_all_vertices(Some(kind))
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// List albums with their ratings, optionally only those tagged with a genre
pub async fn get_albums(
    State(state): State<AppState>,
    Query(query): Query<AlbumsQuery>,
) -> AppResult<Json<Vec<AlbumResponse>>> {
    let graph = state.graph.read().await;

    let albums = match query.genre.as_deref().map(str::trim) {
        Some(genre) => {
            if graph.kind_of(genre) != Some(VertexKind::Genre) {
                return Err(AppError::NotFound(format!("Genre not found: {}", genre)));
            }
            graph.get_neighbours(genre, Some(VertexKind::Album))?
        }
        None => graph.get_all_vertices(Some(VertexKind::Album)),
    };

    Ok(Json(
        albums
            .into_iter()
            .map(|album| AlbumResponse {
                album: album.to_string(),
                rating: graph.score(album).unwrap_or(0),
            })
            .collect(),
    ))
}

/// Neighbours of one vertex, optionally filtered by kind
pub async fn get_neighbours(
    State(state): State<AppState>,
    Query(query): Query<NeighboursQuery>,
) -> AppResult<Json<NeighboursResponse>> {
    let kind = query.kind.as_deref().map(str::parse::<VertexKind>).transpose()?;

    let graph = state.graph.read().await;
    let neighbours = graph.get_neighbours(&query.label, kind)?;
    let vertex_kind = graph
        .kind_of(&query.label)
        .ok_or_else(|| AppError::Internal(format!("Vertex vanished: {}", query.label)))?;

    Ok(Json(NeighboursResponse {
        kind: vertex_kind,
        neighbours: neighbours.into_iter().map(str::to_string).collect(),
        label: query.label,
    }))
}

/// Raw similarity scores for the given albums, in request order
pub async fn similarity(
    State(state): State<AppState>,
    Json(request): Json<SimilarityRequest>,
) -> AppResult<Json<Vec<AlbumSimilarity>>> {
    let graph = state.graph.read().await;

    for album in &request.albums {
        match graph.kind_of(album) {
            Some(VertexKind::Album) => {}
            Some(_) => {
                return Err(AppError::InvalidInput(format!("Not an album: {}", album)));
            }
            None => return Err(AppError::NotFound(format!("Album not found: {}", album))),
        }
    }

    let list = graph.get_similarity_list(&request.albums[..], &request.characteristics[..])?;
    Ok(Json(list.into_entries()))
}

/// Ranked album recommendations for a genre and a set of characteristics
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let mut preferences = ListenerPreferences::new(request.genre);
    for characteristic in &request.characteristics {
        preferences.add_characteristic(characteristic);
    }

    let graph = state.graph.read().await;
    let recommendations = Recommender::new(&graph)
        .with_limit(request.limit.unwrap_or(state.max_results))
        .recommend(&preferences)?;

    Ok(Json(recommendations))
}
