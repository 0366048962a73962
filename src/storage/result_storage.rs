use crate::graph::EdgeRecord;
use crate::match_stats::StatsResult;
use chrono::Utc;
use serde::Serialize;
use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct AnalysisResult<T> {
    tag: String,
    timestamp: i64,
    payload: T,
}

/// Writes `edges` to `<results_dir>/<tag>.json`, returns the written path.
pub fn store_edges_result(
    results_dir: &Path,
    tag: &str,
    edges: &[EdgeRecord],
) -> StatsResult<PathBuf> {
    let res = AnalysisResult {
        tag: tag.to_string(),
        timestamp: Utc::now().timestamp(),
        payload: edges,
    };
    create_dir_all(results_dir)?;
    let path = results_dir.join(format!("{}.json", tag));
    write(&path, serde_json::to_string_pretty(&res)?)?;
    info!("Stored {} edges in {}.", edges.len(), path.display());
    Ok(path)
}
