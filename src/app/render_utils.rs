use std::f32::consts::{FRAC_PI_2, PI};

use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2};

use super::viewport::Viewport;

const SELECTION_POINT_SIZE: f32 = 7.0;

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn segment_visible(rect: Rect, start: Pos2, end: Pos2) -> bool {
    let bounds = Rect::from_two_pos(start, end);
    bounds.intersects(rect)
}

pub(super) fn draw_selection_points(
    painter: &Painter,
    center: Pos2,
    period: f32,
    radius: f32,
    point_size: f32,
) {
    for offset in [0.0, PI, FRAC_PI_2, PI + FRAC_PI_2] {
        let angle = period + offset;
        let point = pos2(
            center.x + angle.sin() * radius,
            center.y + angle.cos() * radius,
        );
        painter.circle_filled(point, point_size / 2.0, Color32::WHITE);
    }
}

pub(super) fn draw_screen_selection_points(
    painter: &Painter,
    center: Pos2,
    period: f32,
    radius: f32,
) {
    draw_selection_points(painter, center, period, radius, SELECTION_POINT_SIZE);
}

pub(super) struct WorldPainter<'a> {
    painter: &'a Painter,
    origin: Vec2,
    viewport: &'a Viewport,
}

impl<'a> WorldPainter<'a> {
    pub(super) fn new(painter: &'a Painter, origin: Vec2, viewport: &'a Viewport) -> Self {
        Self {
            painter,
            origin,
            viewport,
        }
    }

    fn to_screen(&self, world: Pos2) -> Pos2 {
        self.viewport.world_to_screen(world) + self.origin
    }

    fn scaled(&self, length: f32) -> f32 {
        length * self.viewport.scale_factor
    }

    pub(super) fn circle_visible(&self, world: Pos2, radius: f32) -> bool {
        circle_visible(self.painter.clip_rect(), self.to_screen(world), self.scaled(radius))
    }

    pub(super) fn circle(
        &self,
        world: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Color32,
        stroke_width: f32,
    ) {
        let center = self.to_screen(world);
        let radius = self.scaled(radius);
        self.painter.circle_filled(center, radius, fill);
        self.painter
            .circle_stroke(center, radius, Stroke::new(self.scaled(stroke_width), stroke));
    }

    pub(super) fn line(&self, from: Pos2, to: Pos2, width: f32, colour: Color32) {
        let start = self.to_screen(from);
        let end = self.to_screen(to);
        if !segment_visible(self.painter.clip_rect(), start, end) {
            return;
        }
        self.painter
            .line_segment([start, end], Stroke::new(self.scaled(width), colour));
    }

    pub(super) fn selection_points(&self, world: Pos2, period: f32, radius: f32) {
        draw_selection_points(
            self.painter,
            self.to_screen(world),
            period,
            self.scaled(radius),
            self.scaled(SELECTION_POINT_SIZE),
        );
    }
}
