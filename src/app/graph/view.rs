use eframe::egui::{Color32, Painter, Rect};

use super::super::Session;
use super::super::render_utils::WorldPainter;

impl Session {
    pub(in crate::app) fn draw(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let canvas = WorldPainter::new(painter, rect.min.to_vec2(), &self.viewport);
        for edge in &self.edges {
            edge.draw(&self.nodes, &canvas);
        }
        for node in &self.nodes {
            node.draw(&canvas);
        }

        self.draw_overlay(painter, rect);
    }
}
