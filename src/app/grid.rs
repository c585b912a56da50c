// Card grid shared by the home screen and the related-articles section.

use eframe::egui;

use super::state::Screen;
use crate::domain::article::ArticleSummary;
use crate::views::cards::article_card;

impl super::InkpostApp {
    fn on_card_ui(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        article: &ArticleSummary,
        card_w: f32,
        gap: f32,
        c: usize,
        cols: usize,
    ) {
        ui.vertical(|ui| {
            ui.set_min_width(card_w);
            ui.set_max_width(card_w);

            // First sighting of a card kicks off its like-count fetch.
            self.schedule_like_fetch(ctx, &article.slug);

            let action = {
                let cover = self.images.covers.get(&article.slug);
                let like = self.likes.display_for(&article.slug);
                article_card(ui, article, card_w, cover, &like)
            };

            if action.open {
                self.nav = Some(Screen::Article(article.slug.clone()));
            }
            if action.liked {
                self.request_increment(ctx, &article.slug);
            }
        });
        if c + 1 < cols {
            ui.add_space(gap);
        }
    }

    pub(super) fn draw_article_grid(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        data: &[ArticleSummary],
        cols: usize,
        left_pad: f32,
        gap: f32,
        card_w: f32,
    ) {
        let cols = cols.max(1);
        for row in data.chunks(cols) {
            ui.horizontal(|ui| {
                ui.add_space(left_pad);
                for (c, article) in row.iter().enumerate() {
                    self.on_card_ui(ui, ctx, article, card_w, gap, c, cols);
                }
            });
            ui.add_space(gap);
        }
    }

    /// Column count and left padding for the available width.
    pub(super) fn grid_layout(avail_w: f32, card_w: f32, gap: f32) -> (usize, f32) {
        let mut cols = ((avail_w + gap) / (card_w + gap)).floor() as usize;
        if cols == 0 {
            cols = 1;
        }
        let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
        let left_pad = ((avail_w - row_w) / 2.0).max(0.0);
        (cols, left_pad)
    }
}
