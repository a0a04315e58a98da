use crate::models::{AlbumSimilarity, SimilarityList};

/// Orders albums by descending similarity and keeps the first `limit`
///
/// Albums with equal scores stay in the order they were scored in.
pub fn rank(list: SimilarityList, limit: usize) -> Vec<AlbumSimilarity> {
    let mut entries = list.into_entries();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(limit);
    entries
}
