use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClassNode {
    pub id: u32,
    pub name: String,
    pub cluster: u32,
    #[serde(default)]
    pub jar: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct EdgeRecord {
    pub source: u32,
    pub target: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterInfo {
    pub id: u32,
    pub label: String,
    pub size: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset contains no nodes")]
    NoNodes,
    #[error("node id {0} appears more than once")]
    DuplicateNodeId(u32),
    #[error("node ids must cover 1..={count} without gaps (found id {offending})")]
    NonContiguousNodeIds { count: usize, offending: u32 },
    #[error("node {node_id} uses the reserved cluster id 0")]
    ReservedClusterId { node_id: u32 },
    #[error("node {node_id} uses cluster id {cluster}, more than the {count} nodes could fill")]
    ClusterIdOutOfRange {
        node_id: u32,
        cluster: u32,
        count: usize,
    },
}

/// Validated dataset: `nodes[i].id == i + 1` and `clusters[i].id == i + 1`.
#[derive(Clone, Debug)]
pub struct ClassGraph {
    pub nodes: Vec<ClassNode>,
    pub edges: Vec<EdgeRecord>,
    pub clusters: Vec<ClusterInfo>,
    // Edge rows as written, dangling ones included.
    pub declared_edges: usize,
}

impl ClassGraph {
    pub fn from_records(
        mut nodes: Vec<ClassNode>,
        edges: Vec<EdgeRecord>,
    ) -> Result<Self, DatasetError> {
        if nodes.is_empty() {
            return Err(DatasetError::NoNodes);
        }

        let count = nodes.len();
        let mut seen = HashSet::with_capacity(count);
        let mut clusters: Vec<ClusterInfo> = Vec::new();

        for node in &nodes {
            if node.cluster == 0 {
                return Err(DatasetError::ReservedClusterId { node_id: node.id });
            }
            if node.cluster as usize > count {
                return Err(DatasetError::ClusterIdOutOfRange {
                    node_id: node.id,
                    cluster: node.cluster,
                    count,
                });
            }
            if node.id == 0 || node.id as usize > count {
                return Err(DatasetError::NonContiguousNodeIds {
                    count,
                    offending: node.id,
                });
            }
            if !seen.insert(node.id) {
                return Err(DatasetError::DuplicateNodeId(node.id));
            }

            let cluster_index = node.cluster as usize - 1;
            while clusters.len() <= cluster_index {
                let id = clusters.len() as u32 + 1;
                clusters.push(ClusterInfo {
                    id,
                    label: String::new(),
                    size: 0,
                });
            }

            let cluster = &mut clusters[cluster_index];
            if cluster.size == 0 {
                cluster.label = node.jar.clone();
            }
            cluster.size += 1;
        }

        for cluster in &mut clusters {
            if cluster.label.is_empty() {
                cluster.label = format!("cluster {}", cluster.id);
            }
        }

        nodes.sort_by_key(|node| node.id);

        let declared_edges = edges.len();
        let edges = edges
            .into_iter()
            .filter(|edge| {
                let known = |id: u32| id >= 1 && id as usize <= count;
                if known(edge.source) && known(edge.target) {
                    true
                } else {
                    warn!(
                        source = edge.source,
                        target = edge.target,
                        "skipping edge with unknown endpoint"
                    );
                    false
                }
            })
            .collect();

        Ok(Self {
            nodes,
            edges,
            clusters,
            declared_edges,
        })
    }

    pub fn node(&self, id: u32) -> Option<&ClassNode> {
        self.nodes.get((id as usize).checked_sub(1)?)
    }

    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(|cluster| cluster.size).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u32, cluster: u32, jar: &str) -> ClassNode {
        ClassNode {
            id,
            name: format!("com.example.Class{id}"),
            cluster,
            jar: jar.to_owned(),
        }
    }

    #[test]
    fn nodes_are_reordered_by_id() {
        let graph = ClassGraph::from_records(
            vec![node(3, 1, "app"), node(1, 2, "lib.jar"), node(2, 1, "app")],
            Vec::new(),
        )
        .unwrap();

        let ids = graph.nodes.iter().map(|node| node.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(graph.node(2).map(|node| node.cluster), Some(1));
        assert!(graph.node(0).is_none());
        assert!(graph.node(4).is_none());
    }

    #[test]
    fn cluster_label_comes_from_first_member() {
        let graph = ClassGraph::from_records(
            vec![
                node(1, 2, "first.jar"),
                node(2, 2, "second.jar"),
                node(3, 1, "user classes"),
            ],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(graph.clusters.len(), 2);
        assert_eq!(graph.clusters[0].label, "user classes");
        assert_eq!(graph.clusters[1].label, "first.jar");
        assert_eq!(graph.cluster_sizes(), vec![1, 2]);
    }

    #[test]
    fn cluster_gaps_get_placeholder_records() {
        let graph = ClassGraph::from_records(
            vec![node(1, 1, "a.jar"), node(2, 3, "c.jar"), node(3, 1, "a.jar")],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(graph.cluster_sizes(), vec![2, 0, 1]);
        assert_eq!(graph.clusters[1].label, "cluster 2");
    }

    #[test]
    fn rejects_invalid_node_tables() {
        assert_eq!(
            ClassGraph::from_records(Vec::new(), Vec::new()).unwrap_err(),
            DatasetError::NoNodes
        );
        assert_eq!(
            ClassGraph::from_records(vec![node(1, 1, "a"), node(1, 1, "a")], Vec::new())
                .unwrap_err(),
            DatasetError::DuplicateNodeId(1)
        );
        assert_eq!(
            ClassGraph::from_records(vec![node(1, 1, "a"), node(5, 1, "a")], Vec::new())
                .unwrap_err(),
            DatasetError::NonContiguousNodeIds {
                count: 2,
                offending: 5
            }
        );
        assert_eq!(
            ClassGraph::from_records(vec![node(1, 0, "a")], Vec::new()).unwrap_err(),
            DatasetError::ReservedClusterId { node_id: 1 }
        );
    }

    #[test]
    fn rejects_cluster_ids_beyond_node_count() {
        let error = ClassGraph::from_records(vec![node(1, 1, "a"), node(2, 3000, "b")], Vec::new())
            .unwrap_err();

        assert_eq!(
            error,
            DatasetError::ClusterIdOutOfRange {
                node_id: 2,
                cluster: 3000,
                count: 2
            }
        );
        assert!(
            ClassGraph::from_records(vec![node(1, 2, "a"), node(2, 2, "b")], Vec::new()).is_ok()
        );
    }

    #[test]
    fn edges_with_unknown_endpoints_are_dropped() {
        let graph = ClassGraph::from_records(
            vec![node(1, 1, "a"), node(2, 1, "a")],
            vec![
                EdgeRecord { source: 1, target: 2 },
                EdgeRecord { source: 2, target: 7 },
                EdgeRecord { source: 0, target: 1 },
            ],
        )
        .unwrap();

        assert_eq!(graph.edges, vec![EdgeRecord { source: 1, target: 2 }]);
        assert_eq!(graph.declared_edges, 3);
    }
}
