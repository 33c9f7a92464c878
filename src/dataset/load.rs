use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::graph::ClassGraph;
use super::parse::parse_dataset;

pub fn load_class_graph(path: &Path) -> Result<ClassGraph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let graph =
        parse_dataset(&raw).with_context(|| format!("failed to parse dataset {}", path.display()))?;

    info!(
        path = %path.display(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        clusters = graph.clusters.len(),
        "dataset loaded"
    );
    Ok(graph)
}
