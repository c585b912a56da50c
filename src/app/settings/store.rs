// Settings store: data types, global state, load/save.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_likes_base_url() -> String {
    "https://tobynguyen.dev/api".to_string()
}

fn default_site_url() -> String {
    "https://tobynguyen.dev".to_string()
}

fn default_author_name() -> String {
    "Ant Engineer".to_string()
}

fn default_blurb() -> String {
    "Articles, thoughts and ideas around topics like design systems, \
     accessibility, state machines and lots more."
        .to_string()
}

fn default_blurb_short() -> String {
    "I write bite-sized articles for developers".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Directory holding articles.json and the markdown bodies.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
    /// Base URL of the like service (GET /likes/{slug}, POST .../increment).
    #[serde(default = "default_likes_base_url")]
    pub likes_base_url: String,
    /// Canonical site URL used to build share links.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_author_name")]
    pub author_name: String,
    /// Home-screen introduction line.
    #[serde(default = "default_blurb")]
    pub blurb: String,
    /// One-liner under the author box on article pages.
    #[serde(default = "default_blurb_short")]
    pub blurb_short: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub bluesky_url: String,
    #[serde(default)]
    pub linkedin_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            likes_base_url: default_likes_base_url(),
            site_url: default_site_url(),
            author_name: default_author_name(),
            blurb: default_blurb(),
            blurb_short: default_blurb_short(),
            github_url: String::new(),
            bluesky_url: String::new(),
            linkedin_url: String::new(),
        }
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

/// Run `f` against a read lock of the settings.
pub fn with_settings<T>(f: impl FnOnce(&AppSettings) -> T) -> T {
    let st = APP_SETTINGS.read().unwrap();
    f(&st)
}

fn settings_file_path() -> PathBuf {
    // Current working directory, same as the log file; no extra deps.
    PathBuf::from("inkpost_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let s: AppSettings = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(s)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            *APP_SETTINGS.write().unwrap() = s;
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable.
            log::info!(
                "Using default settings; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = APP_SETTINGS.read().unwrap().clone();
    if let Err(e) = st.save_to_file(&path) {
        log::error!(
            "Failed to save settings to {}: {}",
            path.to_string_lossy(),
            e
        );
    } else {
        log::info!("Saved settings to {}", path.to_string_lossy());
    }
}
