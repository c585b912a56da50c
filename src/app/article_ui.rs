// Article screen: cover, title, excerpt, markdown body, share menu, like
// counter, author box and related cards. A missing article is a hard
// failure here; the like counter degrades quietly instead.

use eframe::egui::{self, Color32, Rect, RichText, Sense, Vec2};
use egui_commonmark::CommonMarkViewer;

use crate::ui_constants::{ARTICLE_MAX_WIDTH, CARD_GAP, CARD_WIDTH};
use crate::views::cards::draw_like_button;
use crate::views::share;

impl super::InkpostApp {
    pub(super) fn draw_article(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.net.page_error {
                ui.add_space(crate::ui_constants::spacing::XLARGE);
                ui.vertical_centered(|ui| {
                    ui.colored_label(Color32::RED, format!("Error: {}", err));
                });
                return;
            }
            if self.net.page_loading || self.net.page.is_none() {
                ui.add_space(crate::ui_constants::spacing::XLARGE);
                ui.vertical_centered(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading...");
                });
                return;
            }
            let Some(page) = self.net.page.clone() else {
                return;
            };
            let summary = page.article.summary.clone();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let avail_w = ui.available_width();
                    let content_w = avail_w.min(ARTICLE_MAX_WIDTH);
                    let side_pad = ((avail_w - content_w) / 2.0).max(0.0);

                    ui.horizontal(|ui| {
                        ui.add_space(side_pad);
                        ui.vertical(|ui| {
                            ui.set_max_width(content_w);
                            ui.add_space(crate::ui_constants::spacing::XLARGE);

                            self.draw_article_cover(ui, &summary.slug, content_w);

                            ui.heading(
                                RichText::new(&summary.title)
                                    .strong()
                                    .size(30.0)
                                    .color(Color32::from_rgb(235, 235, 235)),
                            );
                            if !summary.excerpt.is_empty() {
                                ui.label(
                                    RichText::new(&summary.excerpt)
                                        .italics()
                                        .color(Color32::from_rgb(150, 150, 150)),
                                );
                            }
                            ui.label(
                                RichText::new(format!(
                                    "{} · {} min read",
                                    summary.published.format("%b %d, %Y"),
                                    summary.reading_time
                                ))
                                .small()
                                .color(Color32::from_rgb(130, 130, 130)),
                            );
                            ui.add_space(crate::ui_constants::spacing::LARGE);
                            ui.separator();
                            ui.add_space(crate::ui_constants::spacing::LARGE);

                            CommonMarkViewer::new("article_body").show(
                                ui,
                                &mut self.md_cache,
                                &page.article.body,
                            );

                            ui.add_space(crate::ui_constants::spacing::LARGE);
                            ui.horizontal(|ui| {
                                let site_url =
                                    super::settings::with_settings(|st| st.site_url.clone());
                                share::share_menu(ui, &summary, &site_url);
                                let like = self.likes.display_for(&summary.slug);
                                if draw_like_button(ui, &like) {
                                    self.request_increment(ctx, &summary.slug);
                                }
                            });

                            ui.add_space(crate::ui_constants::spacing::LARGE);
                            draw_author_box(ui);
                        });
                    });

                    if !page.related.is_empty() {
                        ui.add_space(crate::ui_constants::spacing::XLARGE);
                        ui.vertical_centered(|ui| {
                            ui.heading("Related articles");
                        });
                        ui.add_space(crate::ui_constants::spacing::LARGE);
                        let avail_w = ui.available_width().floor();
                        let (cols, left_pad) = Self::grid_layout(avail_w, CARD_WIDTH, CARD_GAP);
                        self.draw_article_grid(
                            ui,
                            ctx,
                            &page.related,
                            cols,
                            left_pad,
                            CARD_GAP,
                            CARD_WIDTH,
                        );
                    }
                });
        });
    }

    fn draw_article_cover(&mut self, ui: &mut egui::Ui, slug: &str, content_w: f32) {
        let Some(tex) = self.images.covers.get(slug) else {
            return;
        };
        let tex_size = tex.size_vec2();
        if tex_size.x <= 0.0 {
            return;
        }
        let h = (content_w * tex_size.y / tex_size.x).min(content_w);
        let (rect, _) = ui.allocate_exact_size(Vec2::new(content_w, h), Sense::hover());
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter_at(rect).image(tex.id(), rect, uv, Color32::WHITE);
        ui.add_space(crate::ui_constants::spacing::LARGE);
    }
}

fn draw_author_box(ui: &mut egui::Ui) {
    let (author, tagline) =
        super::settings::with_settings(|st| (st.author_name.clone(), st.blurb_short.clone()));
    egui::Frame::none()
        .fill(Color32::from_rgb(30, 30, 30))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new(format!("By {}", author)).strong());
            ui.label(
                RichText::new(tagline)
                    .small()
                    .color(Color32::from_rgb(150, 150, 150)),
            );
        });
}
