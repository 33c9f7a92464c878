use anyhow::{Context, Result};
use serde::Deserialize;

use super::graph::{ClassGraph, ClassNode, EdgeRecord};

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    nodes: Vec<ClassNode>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

/// Accepts plain JSON or the `var data = {...};` script the reporter writes.
fn strip_script_wrapper(raw: &str) -> &str {
    let trimmed = raw.trim();
    let body = if trimmed.starts_with('{') {
        trimmed
    } else {
        trimmed
            .split_once('=')
            .map(|(_, rest)| rest.trim())
            .unwrap_or(trimmed)
    };
    body.strip_suffix(';').map(str::trim_end).unwrap_or(body)
}

pub(super) fn parse_dataset(raw: &str) -> Result<ClassGraph> {
    let dataset: RawDataset =
        serde_json::from_str(strip_script_wrapper(raw)).context("invalid dataset JSON")?;
    let graph = ClassGraph::from_records(dataset.nodes, dataset.edges)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetError;

    const DOCUMENT: &str = r#"{
      "edges": [ { "source": 1, "target": 2 } ],
      "nodes": [
        { "id": 2, "cluster": 2, "name": "org.lib.Parser", "jar": "lib-1.0.jar" },
        { "id": 1, "cluster": 1, "name": "com.app.Main", "jar": "user classes" }
      ]
    }"#;

    #[test]
    fn parses_plain_json() {
        let graph = parse_dataset(DOCUMENT).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].name, "com.app.Main");
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.clusters[1].label, "lib-1.0.jar");
    }

    #[test]
    fn parses_reporter_script() {
        let script = format!("var data = {DOCUMENT};\n");
        let graph = parse_dataset(&script).unwrap();
        assert_eq!(graph.nodes.len(), 2);

        let without_semicolon = format!("var data = {DOCUMENT}");
        assert!(parse_dataset(&without_semicolon).is_ok());
    }

    #[test]
    fn missing_jar_defaults_to_empty() {
        let graph =
            parse_dataset(r#"{ "nodes": [ { "id": 1, "cluster": 1, "name": "A" } ] }"#).unwrap();
        assert_eq!(graph.nodes[0].jar, "");
        assert_eq!(graph.clusters[0].label, "cluster 1");
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn validation_errors_stay_typed() {
        let error = parse_dataset(r#"{ "nodes": [], "edges": [] }"#).unwrap_err();
        assert_eq!(
            error.downcast_ref::<DatasetError>(),
            Some(&DatasetError::NoNodes)
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let error = parse_dataset("var data = { nodes: ").unwrap_err();
        assert!(format!("{error:#}").contains("invalid dataset JSON"));
    }
}
