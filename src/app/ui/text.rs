use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum TextAlign {
    Left,
    Center,
    Right,
}

/// Screen-space text anchored at its baseline point, like a canvas `text()` call.
#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct TextLabel {
    pub(in crate::app) pos: Pos2,
    pub(in crate::app) size: f32,
    pub(in crate::app) align: TextAlign,
    pub(in crate::app) text: String,
}

impl TextLabel {
    pub(in crate::app) fn new(pos: Pos2, size: f32, align: TextAlign) -> Self {
        Self {
            pos,
            size,
            align,
            text: String::new(),
        }
    }

    pub(in crate::app) fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub(in crate::app) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(in crate::app) fn draw(&self, painter: &Painter, offset: Vec2) {
        let anchor = match self.align {
            TextAlign::Left => Align2::LEFT_BOTTOM,
            TextAlign::Center => Align2::CENTER_BOTTOM,
            TextAlign::Right => Align2::RIGHT_BOTTOM,
        };

        painter.text(
            self.pos + offset,
            anchor,
            &self.text,
            FontId::proportional(self.size),
            Color32::WHITE,
        );
    }
}
