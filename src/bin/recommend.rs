use std::io;

use album_recommender::{interactive, services::load_album_graph, telemetry, Config};

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing(telemetry::PROMPT_FILTER);
    let config = Config::for_prompt(std::env::args().nth(1))?;
    let graph = load_album_graph(&config.dataset_path)?;

    interactive::run(&graph, config.max_results, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
