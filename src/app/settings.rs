mod store;
mod ui;

pub use store::{
    load_settings_from_disk, save_settings_to_disk, with_settings, AppSettings, APP_SETTINGS,
};
pub use ui::{draw_settings_viewport, open_settings};
