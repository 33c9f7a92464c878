use eframe::egui::Pos2;
use tracing::debug;

use crate::util::{Circle, circle_overlap};

use super::super::input::FrameInput;
use super::super::scene::ClusterPoint;
use super::super::viewport::CameraStep;
use super::super::{Interaction, Session};

const PROBE_RADIUS: f32 = 0.0;

impl Session {
    pub(in crate::app) fn update(&mut self, input: &FrameInput) {
        self.canvas_size = input.canvas_size;
        let pointer = input.pointer.unwrap_or(self.previous_pointer);

        if input.pressed {
            self.handle_click(pointer);
        }
        if input.wheel_delta != 0.0 {
            self.viewport.zoom(input.wheel_delta, pointer);
        }

        self.update_camera();
        self.resolve_pointer(pointer, input.pointer_down);

        self.previous_pointer = pointer;
        self.advance_pulses();
    }

    fn update_camera(&mut self) {
        let Interaction::AnimatingTo(target) = self.interaction else {
            return;
        };

        if self.viewport.step_toward(target, self.canvas_size) == CameraStep::Arrived {
            debug!(x = target.x, y = target.y, "camera arrived");
            self.interaction = Interaction::Idle;
        }
    }

    fn resolve_pointer(&mut self, pointer: Pos2, pointer_down: bool) {
        if matches!(self.interaction, Interaction::AnimatingTo(_)) {
            return;
        }

        if !pointer_down {
            self.interaction = Interaction::Idle;
            return;
        }

        match self.interaction {
            Interaction::Dragging(index) => {
                if let Some(world) = self.viewport.screen_to_world(pointer)
                    && let Some(node) = self.nodes.get_mut(index)
                {
                    node.pos = world;
                }
            }
            Interaction::Panning => self.viewport.pan(self.previous_pointer, pointer),
            Interaction::Idle => {
                if let Some(index) = self.node_at(pointer) {
                    self.highlight_node(index);
                    self.interaction = Interaction::Dragging(index);
                } else {
                    self.viewport.pan(self.previous_pointer, pointer);
                    self.interaction = Interaction::Panning;
                }
            }
            Interaction::AnimatingTo(_) => {}
        }
    }

    pub(in crate::app) fn node_at(&self, pointer: Pos2) -> Option<usize> {
        let world = self.viewport.screen_to_world(pointer)?;
        let probe = Circle::new(world.x, world.y, PROBE_RADIUS);
        self.nodes
            .iter()
            .position(|node| circle_overlap(probe, node.circle()))
    }

    fn handle_click(&mut self, pointer: Pos2) {
        self.legend.check_page_click(pointer);
        if let Some(cluster_id) = self.legend.check_entry_click(pointer) {
            self.focus_cluster(cluster_id);
        }
    }

    pub(in crate::app) fn cluster_point(&self, cluster_id: u32) -> Option<ClusterPoint> {
        let index = (cluster_id as usize).checked_sub(1)?;
        self.cluster_points.get(index).copied()
    }

    pub(in crate::app) fn focus_cluster(&mut self, cluster_id: u32) {
        let Some(target) = self.cluster_point(cluster_id) else {
            return;
        };

        debug!(
            cluster_id,
            diameter = target.diameter(),
            "camera animating to cluster"
        );
        self.interaction = Interaction::AnimatingTo(target);
        if let Some(index) = self.nodes.iter().position(|node| node.cluster == cluster_id) {
            self.highlight_node(index);
        }
    }

    pub(in crate::app) fn focus_node(&mut self, index: usize) {
        let Some(cluster_id) = self.nodes.get(index).map(|node| node.cluster) else {
            return;
        };

        if let Some(target) = self.cluster_point(cluster_id) {
            self.interaction = Interaction::AnimatingTo(target);
        }
        self.highlight_node(index);
    }

    // Clears the previous node and its legend entry first.
    pub(in crate::app) fn highlight_node(&mut self, index: usize) {
        if let Some(previous) = self.clicked_node.take()
            && let Some(node) = self.nodes.get_mut(previous)
        {
            node.selected = false;
            if let Some(entry) = self.legend.get_entry(node.cluster) {
                entry.highlight(false);
            }
        }

        let Some(node) = self.nodes.get_mut(index) else {
            self.node_text.set_text(super::build::NODE_TEXT_PLACEHOLDER);
            return;
        };

        node.selected = true;
        self.clicked_node = Some(index);
        self.node_text.set_text(node.name.clone());
        if let Some(entry) = self.legend.get_entry(node.cluster) {
            entry.highlight(true);
        }
        debug!(node = node.id, cluster = node.cluster, "node selected");
    }

    fn advance_pulses(&mut self) {
        for node in &mut self.nodes {
            node.pulse.advance(node.selected);
        }
        self.legend.advance_pulses();
    }

    pub(in crate::app) fn needs_repaint(&self) -> bool {
        self.interaction != Interaction::Idle || self.clicked_node.is_some()
    }
}
