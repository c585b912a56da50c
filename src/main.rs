#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point stays minimal: window config and app startup.
// All logic lives in the app module (src/app.rs).

use eframe::egui;

mod app;
mod domain;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // Initialize in-app GUI logger (also mirrors to stderr)
    logger::init();
    app::settings::load_settings_from_disk();

    // Optional initial search text: the desktop counterpart of the web
    // version's `?search=` query parameter on the home route.
    let initial_search = std::env::args().nth(1);

    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 760.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "inkpost",
        native_options,
        Box::new(move |_cc| Box::new(app::InkpostApp::new(initial_search))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
