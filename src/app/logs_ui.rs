// Logs viewport (separate OS window) with colored levels.

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;
use std::sync::RwLock;

lazy_static! {
    static ref LOGS_OPEN: RwLock<bool> = RwLock::new(false);
    static ref AUTOSCROLL: RwLock<bool> = RwLock::new(true);
}

pub fn open_logs() {
    if let Ok(mut v) = LOGS_OPEN.write() {
        *v = true;
    }
}

fn level_color(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(240, 100, 100),
        Level::Warn => egui::Color32::from_rgb(230, 190, 90),
        Level::Info => egui::Color32::from_rgb(180, 180, 180),
        Level::Debug | Level::Trace => egui::Color32::from_rgb(120, 120, 120),
    }
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    let is_open = LOGS_OPEN.read().map(|g| *g).unwrap_or(false);
    if !is_open {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("logs_window");

    ctx.show_viewport_deferred(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title("Logs")
            .with_inner_size([800.0, 500.0])
            .with_resizable(true),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut v) = LOGS_OPEN.write() {
                    *v = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        crate::logger::clear();
                    }
                    if ui.button("Copy").clicked() {
                        let text = crate::logger::get_all().join("\n");
                        ui.output_mut(|o| o.copied_text = text);
                    }
                    let mut autoscroll = AUTOSCROLL.read().map(|g| *g).unwrap_or(true);
                    if ui.checkbox(&mut autoscroll, "Autoscroll").changed() {
                        if let Ok(mut w) = AUTOSCROLL.write() {
                            *w = autoscroll;
                        }
                    }
                    ui.separator();
                    ui.label(format!("{} lines", crate::logger::len()));
                });
                ui.separator();

                let stick = AUTOSCROLL.read().map(|g| *g).unwrap_or(true);
                let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
                if stick {
                    scroll = scroll.stick_to_bottom(true);
                }

                let total = crate::logger::len();
                let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
                scroll.show_rows(ui, row_height, total, |ui, range| {
                    crate::logger::for_each_range(range.start, range.end, |entry| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!("[{:>5}]", entry.level))
                                    .monospace()
                                    .color(level_color(entry.level)),
                            );
                            ui.label(
                                egui::RichText::new(format!("{}: {}", entry.target, entry.msg))
                                    .monospace(),
                            );
                        });
                    });
                });
            });
        },
    );
}
