use eframe::egui::{self, Color32, Context, Sense};

use super::super::Session;
use super::super::input::FrameInput;

impl Session {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::BLACK))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
                let input = FrameInput::sample(ui, rect, &response);

                self.update(&input);

                let painter = ui.painter_at(rect);
                self.draw(&painter, rect);

                if self.needs_repaint() {
                    ui.ctx().request_repaint();
                }
            });

        self.draw_search(ctx);
    }
}
