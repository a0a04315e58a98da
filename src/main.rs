use album_recommender::{
    api::{create_router, AppState},
    services::load_album_graph,
    telemetry, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing(telemetry::SERVER_FILTER);
    let config = Config::from_env()?;

    // Build the graph once; it is read-only from here on
    let dataset_path = config.dataset_path.clone();
    let graph = tokio::task::spawn_blocking(move || load_album_graph(dataset_path)).await??;

    let state = AppState::new(graph, config.max_results);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
