use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2, pos2, vec2};
use tracing::debug;

use crate::util::{HitBox, box_overlap};

use self::button::PageButton;
use super::render_utils::draw_screen_selection_points;
use super::scene::SelectionPulse;
use super::ui::{TextAlign, TextLabel};

mod button;

pub(in crate::app) const LEGEND_PAGE_CAPACITY: usize = 10;
const ENTRY_TEXT_SIZE: f32 = 15.0;
const ENTRY_INDENT: f32 = 40.0;
const ENTRY_SPACING: f32 = 25.0;
const ENTRY_TOP: f32 = 35.0;
const BUTTON_SPACING: f32 = 30.0;

#[derive(Clone, Debug)]
pub(in crate::app) struct LegendEntry {
    pub(in crate::app) label: TextLabel,
    pub(in crate::app) colour: Color32,
    pub(in crate::app) cluster_id: u32,
    pub(in crate::app) hit_box: HitBox,
    pub(in crate::app) highlighted: bool,
    pub(in crate::app) pulse: SelectionPulse,
}

impl LegendEntry {
    fn new(label: TextLabel, colour: Color32, cluster_id: u32) -> Self {
        let size = label.size;
        let hit_box = HitBox::new(
            label.pos.x - size - 5.0,
            label.pos.y - size,
            size,
            size,
        );
        Self {
            label,
            colour,
            cluster_id,
            hit_box,
            highlighted: false,
            pulse: SelectionPulse::default(),
        }
    }

    pub(in crate::app) fn highlight(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        self.label.draw(painter, offset);

        let swatch = Rect::from_min_size(
            pos2(self.hit_box.x, self.hit_box.y) + offset,
            vec2(self.hit_box.w, self.hit_box.h),
        );
        painter.rect_filled(swatch, 0.0, self.colour);
        painter.rect_stroke(swatch, 0.0, Stroke::new(1.0, Color32::WHITE), StrokeKind::Inside);

        if self.highlighted {
            draw_screen_selection_points(
                painter,
                self.hit_box.center() + offset,
                self.pulse.period,
                self.pulse.current_radius,
            );
        }
    }
}

#[derive(Clone, Debug)]
pub(in crate::app) struct Legend {
    origin: Pos2,
    pages: Vec<Vec<LegendEntry>>,
    current_page: usize,
    previous_button: PageButton,
    next_button: PageButton,
}

impl Legend {
    pub(in crate::app) fn new(origin: Pos2) -> Self {
        Self {
            origin,
            pages: vec![Vec::new()],
            current_page: 0,
            previous_button: PageButton::new(
                HitBox::new(origin.x + 40.0, origin.y, 65.0, 20.0),
                "Previous",
            ),
            next_button: PageButton::new(
                HitBox::new(origin.x + 140.0, origin.y, 65.0, 20.0),
                "Next",
            ),
        }
    }

    pub(in crate::app) fn add_entry(&mut self, text: &str, colour: Color32, cluster_id: u32) {
        if self
            .pages
            .last()
            .is_none_or(|page| page.len() >= LEGEND_PAGE_CAPACITY)
        {
            self.pages.push(Vec::new());
        }
        let Some(page) = self.pages.last_mut() else {
            return;
        };

        let label = TextLabel::new(
            pos2(
                self.origin.x + ENTRY_INDENT,
                self.origin.y + (page.len() + 1) as f32 * ENTRY_SPACING + ENTRY_TOP,
            ),
            ENTRY_TEXT_SIZE,
            TextAlign::Left,
        )
        .with_text(text);
        page.push(LegendEntry::new(label, colour, cluster_id));

        let buttons_y = self.origin.y + self.pages[0].len() as f32 * BUTTON_SPACING;
        self.previous_button.set_y(buttons_y);
        self.next_button.set_y(buttons_y);
    }

    pub(in crate::app) fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[cfg(test)]
    pub(in crate::app) fn current_page(&self) -> usize {
        self.current_page
    }

    pub(in crate::app) fn page(&self, index: usize) -> &[LegendEntry] {
        self.pages.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    pub(in crate::app) fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub(in crate::app) fn has_next(&self) -> bool {
        self.current_page + 1 < self.pages.len()
    }

    #[cfg(test)]
    pub(in crate::app) fn entries(&self) -> impl Iterator<Item = &LegendEntry> {
        self.pages.iter().flatten()
    }

    pub(in crate::app) fn check_page_click(&mut self, pointer: Pos2) -> bool {
        let probe = HitBox::probe(pointer);

        if self.has_previous() && box_overlap(self.previous_button.hit_box, probe) {
            self.current_page -= 1;
        } else if self.has_next() && box_overlap(self.next_button.hit_box, probe) {
            self.current_page += 1;
        } else {
            return false;
        }

        debug!(page = self.current_page, "legend page changed");
        true
    }

    pub(in crate::app) fn check_entry_click(&self, pointer: Pos2) -> Option<u32> {
        let probe = HitBox::probe(pointer);
        self.page(self.current_page)
            .iter()
            .find(|entry| box_overlap(probe, entry.hit_box))
            .map(|entry| entry.cluster_id)
    }

    /// Looks an entry up by position (`cluster_id - 1`) and pages it into view.
    pub(in crate::app) fn get_entry(&mut self, cluster_id: u32) -> Option<&mut LegendEntry> {
        let offset = (cluster_id as usize).checked_sub(1)?;
        let page = offset / LEGEND_PAGE_CAPACITY;
        let index = offset % LEGEND_PAGE_CAPACITY;

        if self.page(page).get(index).is_none() {
            return None;
        }
        self.current_page = page;
        self.pages.get_mut(page)?.get_mut(index)
    }

    pub(in crate::app) fn advance_pulses(&mut self) {
        if let Some(page) = self.pages.get_mut(self.current_page) {
            for entry in page {
                entry.pulse.advance(entry.highlighted);
            }
        }
    }

    pub(in crate::app) fn draw(&self, painter: &Painter, offset: Vec2) {
        for entry in self.page(self.current_page) {
            entry.draw(painter, offset);
        }

        if self.pages.len() <= 1 {
            return;
        }

        self.previous_button
            .draw(painter, offset, self.has_previous());
        self.next_button.draw(painter, offset, self.has_next());
    }
}
