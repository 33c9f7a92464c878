use eframe::egui::{Color32, Pos2};

pub(crate) use crate::layout::ClusterPoint;
use crate::util::Circle;

use super::render_utils::WorldPainter;

pub(in crate::app) const NODE_DIAMETER: f32 = 10.0;

const PULSE_PERIOD_STEP: f32 = 0.09;
const PULSE_START_RADIUS: f32 = 50.0;
const PULSE_MIN_RADIUS: f32 = 11.0;
const EDGE_IDLE_ALPHA: u8 = 60;
const EDGE_WIDTH: f32 = 1.5;

/// Four white points orbiting a selected node or highlighted legend swatch,
/// closing in from `PULSE_START_RADIUS` to `PULSE_MIN_RADIUS`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct SelectionPulse {
    pub(in crate::app) period: f32,
    pub(in crate::app) current_radius: f32,
}

impl Default for SelectionPulse {
    fn default() -> Self {
        Self {
            period: 0.0,
            current_radius: PULSE_START_RADIUS,
        }
    }
}

impl SelectionPulse {
    pub(in crate::app) fn advance(&mut self, active: bool) {
        if !active {
            self.current_radius = PULSE_START_RADIUS;
        } else if self.current_radius > PULSE_MIN_RADIUS {
            self.current_radius -= 1.0;
        }
        self.period += PULSE_PERIOD_STEP;
    }
}

#[derive(Clone, Debug)]
pub(in crate::app) struct Node {
    pub(in crate::app) id: u32,
    pub(in crate::app) name: String,
    pub(in crate::app) pos: Pos2,
    pub(in crate::app) diameter: f32,
    pub(in crate::app) colour: Color32,
    pub(in crate::app) cluster: u32,
    pub(in crate::app) selected: bool,
    pub(in crate::app) pulse: SelectionPulse,
}

impl Node {
    pub(in crate::app) fn new(id: u32, name: String, colour: Color32, cluster: u32) -> Self {
        Self {
            id,
            name,
            pos: Pos2::ZERO,
            diameter: NODE_DIAMETER,
            colour,
            cluster,
            selected: false,
            pulse: SelectionPulse::default(),
        }
    }

    pub(in crate::app) fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    pub(in crate::app) fn circle(&self) -> Circle {
        Circle::new(self.pos.x, self.pos.y, self.radius())
    }

    pub(in crate::app) fn draw(&self, canvas: &WorldPainter<'_>) {
        if !canvas.circle_visible(self.pos, self.pulse.current_radius.max(self.radius())) {
            return;
        }

        if self.selected {
            canvas.selection_points(self.pos, self.pulse.period, self.pulse.current_radius);
        }
        canvas.circle(self.pos, self.radius(), self.colour, Color32::WHITE, 1.0);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct Edge {
    pub(in crate::app) source: usize,
    pub(in crate::app) target: usize,
    pub(in crate::app) colour: Color32,
}

impl Edge {
    pub(in crate::app) fn is_highlighted(&self, nodes: &[Node]) -> bool {
        let selected = |index: usize| nodes.get(index).is_some_and(|node| node.selected);
        selected(self.source) || selected(self.target)
    }

    pub(in crate::app) fn draw(&self, nodes: &[Node], canvas: &WorldPainter<'_>) {
        let (Some(source), Some(target)) = (nodes.get(self.source), nodes.get(self.target)) else {
            return;
        };

        let alpha = if self.is_highlighted(nodes) {
            u8::MAX
        } else {
            EDGE_IDLE_ALPHA
        };
        let colour = Color32::from_rgba_unmultiplied(
            self.colour.r(),
            self.colour.g(),
            self.colour.b(),
            alpha,
        );
        canvas.line(source.pos, target.pos, EDGE_WIDTH, colour);
    }
}
