use eframe::egui::{Pos2, Rect, Response, Ui, Vec2};

/// Pointer and wheel state sampled once per frame, in canvas-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct FrameInput {
    pub(in crate::app) pointer: Option<Pos2>,
    pub(in crate::app) pointer_down: bool,
    pub(in crate::app) pressed: bool,
    // Browser-style wheel delta: positive scrolls down (zooms out).
    pub(in crate::app) wheel_delta: f32,
    pub(in crate::app) canvas_size: Vec2,
}

impl FrameInput {
    pub(in crate::app) fn sample(ui: &Ui, rect: Rect, response: &Response) -> Self {
        let (latest_pos, primary_down, primary_pressed, scroll) = ui.input(|input| {
            (
                input.pointer.latest_pos(),
                input.pointer.primary_down(),
                input.pointer.primary_pressed(),
                input.raw_scroll_delta.y,
            )
        });
        let hovered = response.hovered();

        Self {
            pointer: latest_pos.map(|position| (position - rect.min).to_pos2()),
            pointer_down: primary_down && response.is_pointer_button_down_on(),
            pressed: primary_pressed && hovered,
            wheel_delta: if hovered { -scroll } else { 0.0 },
            canvas_size: rect.size(),
        }
    }
}
