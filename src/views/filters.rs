// Filter widgets for the home screen: search box, tag vocabulary chips and
// the active-filter row. State is passed in by mutable reference and
// updated in place; filtering itself is recomputed by the caller.

use eframe::egui::{self, Color32, RichText, Rounding};
use strum::IntoEnumIterator;

use crate::domain::filter::FilterState;
use crate::ui_constants::card::CHIP_ROUNDING;

/// Short labels for enum-backed switchers (sort modes and the like).
pub trait EnumWithAlternativeNames {
    fn alternative_name(&self) -> &'static str;
}

/// Small horizontal switcher over all variants of an enum.
/// Returns the newly picked variant, if any.
pub fn mode_switch_small<T>(ui: &mut egui::Ui, title: &str, current: &T) -> Option<T>
where
    T: EnumWithAlternativeNames + IntoEnumIterator + PartialEq + Clone,
{
    let mut picked: Option<T> = None;
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).weak());
        for variant in T::iter() {
            let selected = *current == variant;
            if ui
                .selectable_label(selected, variant.alternative_name())
                .clicked()
                && !selected
            {
                picked = Some(variant);
            }
        }
    });
    picked
}

/// Search field with an inline clear button.
/// Returns true if the text changed this frame.
pub fn search_box(ui: &mut egui::Ui, filter: &mut FilterState) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        let w = (ui.available_width() - 28.0).max(80.0);
        let resp = ui.add_sized(
            [w, 0.0],
            egui::TextEdit::singleline(filter.search_text_mut())
                .hint_text("Search articles by title..."),
        );
        changed = resp.changed();
        if !filter.search_text().is_empty() && ui.button("✖").clicked() {
            filter.clear_search();
            changed = true;
        }
    });
    changed
}

fn chip_button(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let (fill, text_color) = if selected {
        (Color32::from_rgb(74, 222, 128), Color32::BLACK)
    } else {
        (Color32::from_rgb(22, 22, 22), Color32::from_rgb(220, 220, 220))
    };
    ui.add(
        egui::Button::new(RichText::new(label).color(text_color))
            .fill(fill)
            .rounding(Rounding::same(CHIP_ROUNDING)),
    )
}

/// Tag vocabulary as toggle chips, in first-seen order.
/// Returns true if the selection changed.
pub fn draw_tag_chips(ui: &mut egui::Ui, vocabulary: &[String], filter: &mut FilterState) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = crate::ui_constants::spacing::MEDIUM;
        for tag in vocabulary {
            let selected = filter.is_selected(tag);
            if chip_button(ui, tag, selected).clicked() {
                filter.toggle_tag(tag);
                changed = true;
            }
        }
    });
    changed
}

/// Active filters in insertion order, each removable with a click, plus a
/// reset button. Drawn only when something is active.
pub fn draw_active_filters(ui: &mut egui::Ui, filter: &mut FilterState) -> bool {
    if filter.is_empty() {
        return false;
    }
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("Active:").weak());
        let mut to_remove: Option<String> = None;
        for tag in filter.selected_tags() {
            if ui.button(format!("{} ✖", tag)).clicked() {
                to_remove = Some(tag.clone());
            }
        }
        if let Some(tag) = to_remove {
            filter.toggle_tag(&tag);
            changed = true;
        }
        if !filter.search_text().is_empty() {
            if ui
                .button(format!("\"{}\" ✖", filter.search_text()))
                .clicked()
            {
                filter.clear_search();
                changed = true;
            }
        }
    });
    changed
}
