// Shared chrome: header bar with navigation and a footer strip with
// profile links. Both read display strings from settings.

use eframe::egui::{self, Color32, RichText};

use crate::app::settings;

#[derive(Default)]
pub struct HeaderAction {
    pub home_clicked: bool,
    pub about_clicked: bool,
    pub settings_clicked: bool,
    pub logs_clicked: bool,
}

pub fn draw_header(ctx: &egui::Context) -> HeaderAction {
    let mut action = HeaderAction::default();
    let author = settings::with_settings(|st| st.author_name.clone());

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::none()
                .fill(Color32::from_rgb(24, 24, 24))
                .inner_margin(10.0),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(author).strong().heading());
                ui.separator();
                if ui.button("Articles").clicked() {
                    action.home_clicked = true;
                }
                if ui.button("About").clicked() {
                    action.about_clicked = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logs").clicked() {
                        action.logs_clicked = true;
                    }
                    if ui.button("Settings").clicked() {
                        action.settings_clicked = true;
                    }
                });
            });
        });
    action
}

pub fn draw_footer(ctx: &egui::Context) {
    let (author, github, bluesky, linkedin) = settings::with_settings(|st| {
        (
            st.author_name.clone(),
            st.github_url.clone(),
            st.bluesky_url.clone(),
            st.linkedin_url.clone(),
        )
    });

    egui::TopBottomPanel::bottom("footer")
        .frame(
            egui::Frame::none()
                .fill(Color32::from_rgb(24, 24, 24))
                .inner_margin(8.0),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("© {}", author))
                        .small()
                        .color(Color32::from_rgb(140, 140, 140)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !linkedin.is_empty() {
                        ui.hyperlink_to(RichText::new("LinkedIn").small(), linkedin);
                    }
                    if !bluesky.is_empty() {
                        ui.hyperlink_to(RichText::new("Bluesky").small(), bluesky);
                    }
                    if !github.is_empty() {
                        ui.hyperlink_to(RichText::new("GitHub").small(), github);
                    }
                });
            });
        });
}
