use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{AlbumGraph, AlbumRecord, GraphError, VertexKind},
};

/// Counters gathered while building the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub records: usize,
    /// Labels that were already taken by a vertex of another kind
    pub kind_collisions: usize,
    /// Edges dropped because both ends resolved to the same vertex
    pub skipped_self_loops: usize,
}

/// Loads the review dataset at `path` into an album graph
pub fn load_album_graph(path: impl AsRef<Path>) -> AppResult<AlbumGraph> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| AppError::Dataset(format!("{}: {}", path.display(), e)))?;

    let records = parse_records(BufReader::new(file))?;
    tracing::info!(path = %path.display(), records = records.len(), "Dataset parsed");

    let (graph, _) = build_graph(&records)?;
    Ok(graph)
}

/// Parses a JSON array of album records
pub fn parse_records<R: Read>(reader: R) -> AppResult<Vec<AlbumRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Builds the album graph from parsed records
///
/// Each record yields an album vertex, its rating, one genre vertex per genre
/// and one characteristic vertex per review keyword, each joined to the album.
pub fn build_graph(records: &[AlbumRecord]) -> AppResult<(AlbumGraph, IngestStats)> {
    let mut graph = AlbumGraph::new();
    let mut stats = IngestStats::default();

    for record in records {
        ingest_record(&mut graph, record, &mut stats)?;
    }

    if stats.kind_collisions > 0 {
        tracing::warn!(
            collisions = stats.kind_collisions,
            "Labels shared between vertex kinds were merged into one vertex"
        );
    }
    tracing::info!(
        records = stats.records,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        albums = graph.scores().len(),
        skipped_self_loops = stats.skipped_self_loops,
        "Album graph built"
    );

    Ok((graph, stats))
}

fn ingest_record(
    graph: &mut AlbumGraph,
    record: &AlbumRecord,
    stats: &mut IngestStats,
) -> Result<(), GraphError> {
    let album = record.label();
    add_checked(graph, &album, VertexKind::Album, stats);
    if graph.kind_of(&album) == Some(VertexKind::Album) {
        graph.set_score(&album, record.score())?;
    }

    for genre in &record.genre {
        link(graph, &album, genre, VertexKind::Genre, stats)?;
    }
    for keyword in record.keywords() {
        link(graph, &album, keyword, VertexKind::Characteristic, stats)?;
    }

    stats.records += 1;
    Ok(())
}

fn link(
    graph: &mut AlbumGraph,
    album: &str,
    label: &str,
    kind: VertexKind,
    stats: &mut IngestStats,
) -> Result<(), GraphError> {
    if label.trim().is_empty() {
        return Ok(());
    }
    add_checked(graph, label, kind, stats);

    match graph.add_edge(album, label) {
        Err(GraphError::SelfLoop(label)) => {
            tracing::warn!(label = %label, "Skipping edge from a vertex to itself");
            stats.skipped_self_loops += 1;
            Ok(())
        }
        other => other,
    }
}

fn add_checked(graph: &mut AlbumGraph, label: &str, kind: VertexKind, stats: &mut IngestStats) {
    if matches!(graph.kind_of(label), Some(existing) if existing != kind) {
        stats.kind_collisions += 1;
    }
    graph.add_vertex(label, kind);
}
