use eframe::egui::{self, Align2, Context, Key, vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::debug;

use super::super::Session;
use super::super::scene::Node;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

// Ties go to the lowest id.
pub(in crate::app) fn best_name_match(nodes: &[Node], query: &str) -> Option<usize> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    nodes
        .iter()
        .enumerate()
        .filter_map(|(index, node)| {
            fuzzy_match_score(&matcher, &node.name, query).map(|score| (index, score))
        })
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(index, _)| index)
}

impl Session {
    pub(in crate::app) fn draw_search(&mut self, ctx: &Context) {
        egui::Area::new(egui::Id::new("node_search"))
            .anchor(Align2::LEFT_BOTTOM, vec2(12.0, -12.0))
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search)
                        .hint_text("Find class (Enter)")
                        .desired_width(280.0),
                );
                if response.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter)) {
                    self.focus_search_match();
                }
            });
    }

    pub(in crate::app) fn focus_search_match(&mut self) {
        match best_name_match(&self.nodes, &self.search) {
            Some(index) => {
                debug!(query = self.search.as_str(), index, "search matched");
                self.focus_node(index);
            }
            None => debug!(query = self.search.as_str(), "search found nothing"),
        }
    }
}
