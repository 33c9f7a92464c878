use eframe::egui::{Color32, Painter, Rect, Stroke, StrokeKind, Vec2, pos2, vec2};

use crate::util::HitBox;

use super::super::ui::{TextAlign, TextLabel};

const LABEL_SIZE: f32 = 15.0;
const LABEL_PADDING: f32 = 5.0;
const FILL: Color32 = Color32::from_rgb(0xe2, 0xa2, 0x0d);

#[derive(Clone, Debug)]
pub(in crate::app) struct PageButton {
    pub(in crate::app) hit_box: HitBox,
    label: TextLabel,
}

impl PageButton {
    pub(in crate::app) fn new(hit_box: HitBox, text: &str) -> Self {
        let label = TextLabel::new(
            pos2(
                hit_box.x + hit_box.w / 2.0,
                hit_box.y + hit_box.h / 2.0 + LABEL_PADDING,
            ),
            LABEL_SIZE,
            TextAlign::Center,
        )
        .with_text(text);
        Self { hit_box, label }
    }

    pub(in crate::app) fn set_y(&mut self, y: f32) {
        self.hit_box.y = y;
        self.label.pos.y = y + self.hit_box.h / 2.0 + LABEL_PADDING;
    }

    pub(in crate::app) fn draw(&self, painter: &Painter, offset: Vec2, active: bool) {
        let (fill, stroke) = if active {
            (FILL, Color32::WHITE)
        } else {
            (
                Color32::from_rgba_unmultiplied(FILL.r(), FILL.g(), FILL.b(), 0x64),
                Color32::from_rgba_unmultiplied(255, 255, 255, 100),
            )
        };

        let rect = Rect::from_min_size(
            pos2(self.hit_box.x, self.hit_box.y) + offset,
            vec2(self.hit_box.w, self.hit_box.h),
        );
        painter.rect_filled(rect, 0.0, fill);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, stroke), StrokeKind::Inside);
        self.label.draw(painter, offset);
    }
}
