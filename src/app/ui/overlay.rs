use eframe::egui::{Painter, Rect, pos2};

use super::super::Session;
use super::text::{TextAlign, TextLabel};

const STAT_TEXT_SIZE: f32 = 15.0;
const STAT_RIGHT_MARGIN: f32 = 15.0;

impl Session {
    pub(in crate::app) fn stat_lines(&self) -> [String; 3] {
        [
            format!("{} : Clusters", self.stats.clusters),
            format!("{} : Classes", self.stats.classes),
            format!("{} : Edges", self.stats.edges),
        ]
    }

    pub(in crate::app) fn draw_overlay(&self, painter: &Painter, rect: Rect) {
        let offset = rect.min.to_vec2();

        self.node_text.draw(painter, offset);
        self.legend.draw(painter, offset);

        for (row, line) in self.stat_lines().into_iter().enumerate() {
            TextLabel::new(
                pos2(rect.width() - STAT_RIGHT_MARGIN, row as f32 * 20.0 + 35.0),
                STAT_TEXT_SIZE,
                TextAlign::Right,
            )
            .with_text(line)
            .draw(painter, offset);
        }
    }
}
