// Settings viewport (separate OS window).

use eframe::egui;
use lazy_static::lazy_static;
use std::sync::RwLock;

use super::store::{save_settings_to_disk, APP_SETTINGS};

lazy_static! {
    static ref SETTINGS_OPEN: RwLock<bool> = RwLock::new(false);
}

pub fn open_settings() {
    if let Ok(mut v) = SETTINGS_OPEN.write() {
        *v = true;
    }
}

pub fn draw_settings_viewport(ctx: &egui::Context) {
    let is_open = SETTINGS_OPEN.read().map(|g| *g).unwrap_or(false);
    if !is_open {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("settings_window");

    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title("Settings")
            .with_inner_size([460.0, 420.0])
            .with_resizable(true),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut v) = SETTINGS_OPEN.write() {
                    *v = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                ctx.request_repaint();
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                let mut st = APP_SETTINGS.write().unwrap();

                ui.heading("Settings");
                ui.add_space(8.0);

                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Content directory:");
                        let mut dir = st.content_dir.to_string_lossy().to_string();
                        if ui.text_edit_singleline(&mut dir).changed() {
                            st.content_dir = dir.into();
                        }
                        ui.end_row();

                        ui.label("Like service URL:");
                        ui.text_edit_singleline(&mut st.likes_base_url);
                        ui.end_row();

                        ui.label("Site URL:");
                        ui.text_edit_singleline(&mut st.site_url);
                        ui.end_row();

                        ui.label("Author name:");
                        ui.text_edit_singleline(&mut st.author_name);
                        ui.end_row();

                        ui.label("Home blurb:");
                        ui.text_edit_multiline(&mut st.blurb);
                        ui.end_row();

                        ui.label("Author tagline:");
                        ui.text_edit_singleline(&mut st.blurb_short);
                        ui.end_row();

                        ui.label("GitHub URL:");
                        ui.text_edit_singleline(&mut st.github_url);
                        ui.end_row();

                        ui.label("Bluesky URL:");
                        ui.text_edit_singleline(&mut st.bluesky_url);
                        ui.end_row();

                        ui.label("LinkedIn URL:");
                        ui.text_edit_singleline(&mut st.linkedin_url);
                        ui.end_row();
                    });

                drop(st);
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        save_settings_to_disk();
                    }
                    ui.label(
                        egui::RichText::new(
                            "Content changes apply on the next reload (restart or Articles).",
                        )
                        .small()
                        .weak(),
                    );
                });
            });
        },
    );
}
