use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use album_recommender::api::{create_router, AppState};
use album_recommender::middleware::REQUEST_ID_HEADER;
use album_recommender::services::dataset::{build_graph, parse_records};

const DATASET: &str = r#"[
    {
        "artist": "Radiohead",
        "title": "OK Computer",
        "user_score": 80,
        "critic_score": 90,
        "genre": ["rock", "alternative"],
        "reviews": [{"keywords": ["melancholic", "ambitious"]}, {"keywords": ["dense"]}]
    },
    {
        "artist": "Pixies",
        "title": "Doolittle",
        "user_score": 88,
        "critic_score": null,
        "genre": ["rock"],
        "reviews": [{"keywords": ["raw", "catchy"]}]
    },
    {
        "artist": "The Strokes",
        "title": "Is This It",
        "user_score": null,
        "critic_score": 91,
        "genre": ["rock"],
        "reviews": [{"keywords": ["catchy", "raw", "ambitious"]}]
    },
    {
        "artist": "Miles Davis",
        "title": "Kind of Blue",
        "user_score": null,
        "critic_score": null,
        "genre": ["jazz"],
        "reviews": [{"keywords": ["smooth"]}]
    }
]"#;

fn create_test_server() -> TestServer {
    let records = parse_records(DATASET.as_bytes()).unwrap();
    let (graph, _) = build_graph(&records).unwrap();
    let state = AppState::new(graph, 10);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let server = create_test_server();

    let response = server.get("/health").await;
    let generated = response.header(REQUEST_ID_HEADER);
    assert!(!generated.is_empty());

    let id = "6f1c1b1e-8d2a-4c56-9a3e-2f0d7b5e9c41";
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_static(id),
        )
        .await;
    assert_eq!(response.header(REQUEST_ID_HEADER).to_str().unwrap(), id);
}

#[tokio::test]
async fn test_list_genres_and_characteristics() {
    let server = create_test_server();

    let genres: Vec<String> = server.get("/genres").await.json();
    assert_eq!(genres, vec!["rock", "alternative", "jazz"]);

    let characteristics: Vec<String> = server.get("/characteristics").await.json();
    assert_eq!(
        characteristics,
        vec!["melancholic", "ambitious", "dense", "raw", "catchy", "smooth"]
    );
}

#[tokio::test]
async fn test_albums_by_genre() {
    let server = create_test_server();

    let response = server.get("/albums").add_query_param("genre", "rock").await;
    response.assert_status_ok();
    let albums: Value = response.json();
    assert_eq!(
        albums,
        json!([
            {"album": "OK Computer by Radiohead", "rating": 85},
            {"album": "Doolittle by Pixies", "rating": 88},
            {"album": "Is This It by The Strokes", "rating": 91}
        ])
    );

    let all: Vec<Value> = server.get("/albums").await.json();
    assert_eq!(all.len(), 4);
    assert_eq!(all[3]["rating"], 0);
}

#[tokio::test]
async fn test_albums_unknown_genre() {
    let server = create_test_server();

    let response = server.get("/albums").add_query_param("genre", "polka").await;
    response.assert_status(StatusCode::NOT_FOUND);

    // Characteristics are not genres
    let response = server.get("/albums").add_query_param("genre", "catchy").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_neighbours() {
    let server = create_test_server();

    let response = server
        .get("/neighbours")
        .add_query_param("label", "OK Computer by Radiohead")
        .add_query_param("kind", "genre")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["kind"], "album");
    assert_eq!(body["neighbours"], json!(["rock", "alternative"]));

    let body: Value = server
        .get("/neighbours")
        .add_query_param("label", "catchy")
        .await
        .json();
    assert_eq!(body["kind"], "characteristic");
    assert_eq!(
        body["neighbours"],
        json!(["Doolittle by Pixies", "Is This It by The Strokes"])
    );
}

#[tokio::test]
async fn test_neighbours_errors() {
    let server = create_test_server();

    let response = server
        .get("/neighbours")
        .add_query_param("label", "nonexistent")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .get("/neighbours")
        .add_query_param("label", "catchy")
        .add_query_param("kind", "artist")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid vertex kind: artist");
}

#[tokio::test]
async fn test_similarity_keeps_request_order() {
    let server = create_test_server();

    let response = server
        .post("/similarity")
        .json(&json!({
            "albums": ["Kind of Blue by Miles Davis", "Is This It by The Strokes", "Doolittle by Pixies"],
            "characteristics": ["catchy", "raw", "unheard-of"]
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            {"album": "Kind of Blue by Miles Davis", "score": 0},
            {"album": "Is This It by The Strokes", "score": 2},
            {"album": "Doolittle by Pixies", "score": 2}
        ])
    );
}

#[tokio::test]
async fn test_similarity_rejects_non_albums() {
    let server = create_test_server();

    let response = server
        .post("/similarity")
        .json(&json!({"albums": ["rock"], "characteristics": ["catchy"]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/similarity")
        .json(&json!({"albums": ["Ghost by Nobody"], "characteristics": ["catchy"]}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommendation_flow() {
    let server = create_test_server();

    let response = server
        .post("/recommendations")
        .json(&json!({
            "genre": "rock",
            "characteristics": ["ambitious", "catchy", "shimmering"]
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            {"album": "Is This It by The Strokes", "similarity": 2, "rating": 91},
            {"album": "OK Computer by Radiohead", "similarity": 1, "rating": 85},
            {"album": "Doolittle by Pixies", "similarity": 1, "rating": 88}
        ])
    );
}

#[tokio::test]
async fn test_recommendation_limit() {
    let server = create_test_server();

    let body: Vec<Value> = server
        .post("/recommendations")
        .json(&json!({"genre": "rock", "characteristics": ["raw"], "limit": 1}))
        .await
        .json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["album"], "Doolittle by Pixies");
}

#[tokio::test]
async fn test_recommendation_errors() {
    let server = create_test_server();

    let response = server
        .post("/recommendations")
        .json(&json!({"genre": "polka", "characteristics": ["catchy"]}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .post("/recommendations")
        .json(&json!({"genre": "rock", "characteristics": []}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = server
        .post("/recommendations")
        .json(&json!({"genre": "rock", "characteristics": ["shimmering"]}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "None of the requested characteristics appear in any review"
    );
}
