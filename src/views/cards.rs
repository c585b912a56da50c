// Article card: pure presentational mapping from a summary to a fixed-width
// tile. The card renders whatever it is given; missing optional fields
// (excerpt, cover) render as empty, never as an error.

use eframe::egui::{self, Color32, Rect, RichText, Rounding, Sense, Stroke, Vec2};

use crate::domain::article::ArticleSummary;
use crate::ui_constants::card;

/// Clicks reported by a card so the caller can route or count likes.
pub struct CardAction {
    pub open: bool,
    pub liked: bool,
}

/// Like-counter display state precomputed by the caller. Keeps the card a
/// pure function of its inputs.
pub struct LikeDisplay {
    pub text: String,
    pub failed: bool,
}

/// Fixed-width card: cover, title, excerpt, meta row, tag pills.
/// Strictly constrained to `width` so rows form a proper grid.
pub fn article_card(
    ui: &mut egui::Ui,
    article: &ArticleSummary,
    width: f32,
    cover_tex: Option<&egui::TextureHandle>,
    like: &LikeDisplay,
) -> CardAction {
    let rounding = Rounding::same(card::ROUNDING);
    let fill = Color32::from_rgb(36, 36, 36);
    let stroke = Stroke::new(1.0, Color32::from_rgb(64, 64, 64));

    ui.set_min_width(width);
    ui.set_max_width(width);

    let mut open = false;
    let mut liked = false;

    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(rounding)
        .inner_margin(egui::Margin::symmetric(
            card::INNER_MARGIN,
            card::INNER_MARGIN,
        ))
        .show(ui, |ui| {
            let inner_w = width - card::INNER_MARGIN * 2.0;
            ui.set_width(inner_w);

            open |= draw_cover(ui, article, inner_w, cover_tex);
            ui.add_space(card::POST_COVER_GAP);

            // Title doubles as the link to the article screen.
            let title = RichText::new(&article.title)
                .heading()
                .color(Color32::from_rgb(230, 230, 230));
            if ui.link(title).clicked() {
                open = true;
            }

            if !article.excerpt.is_empty() {
                ui.add_space(crate::ui_constants::spacing::SMALL);
                ui.label(
                    RichText::new(&article.excerpt)
                        .small()
                        .color(Color32::from_rgb(180, 180, 180)),
                );
            }
            ui.add_space(crate::ui_constants::spacing::SMALL);

            // Meta row: date, reading time, like counter.
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = crate::ui_constants::spacing::MEDIUM;
                let col = Color32::from_rgb(170, 170, 170);
                ui.label(
                    RichText::new(format!("🕓 {}", article.published.format("%b %d, %Y")))
                        .small()
                        .color(col),
                );
                ui.label(
                    RichText::new(format!("📖 {} min read", article.reading_time))
                        .small()
                        .color(col),
                );
                liked |= draw_like_button(ui, like);
            });

            if !article.tags.is_empty() {
                ui.add_space(crate::ui_constants::spacing::SMALL);
                draw_tag_pills(ui, &article.tags);
            }
        });

    CardAction { open, liked }
}

/// Like button: heart plus the current count (or the placeholder when the
/// count never loaded). A failed increment tints the widget red for the
/// next frames; it never blocks anything.
pub fn draw_like_button(ui: &mut egui::Ui, like: &LikeDisplay) -> bool {
    let col = if like.failed {
        Color32::from_rgb(240, 100, 100)
    } else {
        Color32::from_rgb(170, 170, 170)
    };
    let resp = ui.add(
        egui::Button::new(RichText::new(format!("♥ {}", like.text)).small().color(col))
            .frame(false),
    );
    resp.on_hover_text("Like this article").clicked()
}

/// 16:9 cover area. Shows the loaded texture, otherwise a dark placeholder.
/// Returns true when clicked.
fn draw_cover(
    ui: &mut egui::Ui,
    article: &ArticleSummary,
    inner_w: f32,
    cover_tex: Option<&egui::TextureHandle>,
) -> bool {
    let size = Vec2::new(inner_w, inner_w * 9.0 / 16.0);
    let (rect, resp) = ui.allocate_exact_size(size, Sense::click());
    let painter = ui.painter_at(rect);
    let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

    match cover_tex {
        Some(tex) => {
            painter.image(tex.id(), rect, uv, Color32::WHITE);
        }
        None => {
            painter.rect_filled(rect, Rounding::same(4.0), Color32::from_rgb(26, 26, 26));
            if !article.cover.is_empty() {
                // Cover exists but hasn't arrived (or failed); keep it quiet.
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "…",
                    egui::TextStyle::Heading.resolve(ui.style()),
                    Color32::from_rgb(70, 70, 70),
                );
            }
        }
    }
    resp.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
}

fn draw_tag_pills(ui: &mut egui::Ui, tags: &[String]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = crate::ui_constants::spacing::SMALL;
        for tag in tags {
            egui::Frame::none()
                .fill(Color32::from_rgb(50, 50, 50))
                .rounding(Rounding::same(card::CHIP_ROUNDING))
                .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(tag)
                            .small()
                            .color(Color32::from_rgb(200, 200, 200)),
                    );
                });
        }
    });
}
