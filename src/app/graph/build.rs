use eframe::egui::{Color32, Pos2, Vec2, pos2};
use rand::Rng;
use tracing::{debug, warn};

use crate::dataset::ClassGraph;
use crate::layout::{place_clusters, scatter_in_cluster};
use crate::util::color_gradient;

use super::super::legend::Legend;
use super::super::scene::{Edge, Node};
use super::super::ui::{TextAlign, TextLabel};
use super::super::viewport::Viewport;
use super::super::{Interaction, Session, StatCounters};

pub(in crate::app) const NODE_TEXT_PLACEHOLDER: &str = "Select a Node";

fn random_colour<R: Rng>(rng: &mut R) -> Color32 {
    Color32::from_rgb(
        rng.gen_range(0..255),
        rng.gen_range(0..255),
        rng.gen_range(0..255),
    )
}

impl Session {
    pub(in crate::app) fn new<R: Rng>(graph: &ClassGraph, canvas_size: Vec2, rng: &mut R) -> Self {
        let colours = graph
            .clusters
            .iter()
            .map(|_| random_colour(rng))
            .collect::<Vec<_>>();
        let colour_of = |cluster: u32| {
            (cluster as usize)
                .checked_sub(1)
                .and_then(|index| colours.get(index))
                .copied()
                .unwrap_or(Color32::WHITE)
        };

        let center = (canvas_size / 2.0).to_pos2();
        let placement = place_clusters(&graph.cluster_sizes(), center, rng);
        if !placement.overlap_free() {
            warn!(
                overlapping = placement.exhausted.len(),
                clusters = placement.points.len(),
                "some clusters overlap their neighbours"
            );
        }

        let nodes = graph
            .nodes
            .iter()
            .map(|record| {
                let mut node = Node::new(
                    record.id,
                    record.name.clone(),
                    colour_of(record.cluster),
                    record.cluster,
                );
                if let Some(anchor) = placement.point(record.cluster) {
                    node.pos = scatter_in_cluster(anchor, rng);
                }
                node
            })
            .collect::<Vec<_>>();

        let edges = graph
            .edges
            .iter()
            .filter_map(|record| {
                let source_colour = colour_of(graph.node(record.source)?.cluster);
                let target_colour = colour_of(graph.node(record.target)?.cluster);
                Some(Edge {
                    source: record.source as usize - 1,
                    target: record.target as usize - 1,
                    colour: color_gradient(source_colour, target_colour),
                })
            })
            .collect::<Vec<_>>();

        let mut legend = Legend::new(Pos2::ZERO);
        for cluster in &graph.clusters {
            legend.add_entry(&cluster.label, colour_of(cluster.id), cluster.id);
        }

        let stats = StatCounters {
            clusters: graph.clusters.len(),
            classes: nodes.len(),
            edges: graph.declared_edges.saturating_sub(1),
        };

        debug!(
            clusters = stats.clusters,
            legend_pages = legend.page_count(),
            "session built"
        );

        Self {
            nodes,
            edges,
            cluster_points: placement.points,
            legend,
            viewport: Viewport::default(),
            interaction: Interaction::Idle,
            clicked_node: None,
            previous_pointer: Pos2::ZERO,
            canvas_size,
            node_text: TextLabel::new(pos2(20.0, 30.0), 20.0, TextAlign::Left)
                .with_text(NODE_TEXT_PLACEHOLDER),
            stats,
            search: String::new(),
        }
    }
}
