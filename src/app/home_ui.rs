// Home screen: heading, search box, tag chips, and the filtered card grid.
// Filtering is a pure derivation over (loaded summaries, filter state),
// recomputed every frame; there is nothing to invalidate.

use eframe::egui::{self, Color32, RichText};

use crate::domain::filter::{derive_filtered_list, derive_tag_vocabulary};
use crate::ui_constants::{CARD_GAP, CARD_WIDTH};
use crate::views::filters;

impl super::InkpostApp {
    pub(super) fn draw_home(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(crate::ui_constants::spacing::XLARGE);
                    ui.heading(RichText::new("Articles").strong());
                    ui.label(
                        RichText::new(super::settings::with_settings(|st| st.blurb.clone()))
                            .color(Color32::from_rgb(150, 150, 150)),
                    );
                    ui.add_space(crate::ui_constants::spacing::LARGE);

                    if let Some(err) = &self.net.list_error {
                        ui.vertical_centered(|ui| {
                            ui.colored_label(Color32::RED, format!("Error: {}", err));
                        });
                        return;
                    }
                    if self.net.list_loading && self.net.summaries.is_none() {
                        ui.add_space(crate::ui_constants::spacing::XLARGE);
                        ui.vertical_centered(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label("Loading...");
                        });
                        return;
                    }
                    let Some(summaries) = self.net.summaries.clone() else {
                        return;
                    };

                    filters::search_box(ui, &mut self.home.filter);
                    ui.add_space(crate::ui_constants::spacing::MEDIUM);

                    if let Some(sort) = filters::mode_switch_small(ui, "SORT", &self.home.sort) {
                        self.home.sort = sort;
                        if let Some(list) = self.net.summaries.as_mut() {
                            self.home.sort.apply(list);
                        }
                    }
                    ui.add_space(crate::ui_constants::spacing::MEDIUM);

                    let vocabulary = derive_tag_vocabulary(&summaries);
                    filters::draw_tag_chips(ui, &vocabulary, &mut self.home.filter);
                    filters::draw_active_filters(ui, &mut self.home.filter);
                    ui.add_space(crate::ui_constants::spacing::LARGE);

                    // Re-read: the sort switch above may have reordered the list.
                    let summaries = self.net.summaries.clone().unwrap_or_default();
                    let filtered = derive_filtered_list(&summaries, &self.home.filter);

                    if filtered.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("No articles match the current filters.")
                                    .color(Color32::from_rgb(140, 140, 140)),
                            );
                        });
                        return;
                    }

                    let avail_w = ui.available_width().floor();
                    let (cols, left_pad) = Self::grid_layout(avail_w, CARD_WIDTH, CARD_GAP);
                    self.draw_article_grid(
                        ui, ctx, &filtered, cols, left_pad, CARD_GAP, CARD_WIDTH,
                    );

                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(format!(
                                "{} / {} articles",
                                filtered.len(),
                                summaries.len()
                            ))
                            .small()
                            .color(Color32::from_rgb(120, 120, 120)),
                        );
                    });
                });
        });
    }
}
