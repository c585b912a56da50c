// Share menu for the article screen: Bluesky, LinkedIn, copy link.
// Share targets open in the system browser; the canonical article URL is
// built from the site URL configured in settings.

use eframe::egui;

use crate::domain::article::ArticleSummary;

pub fn article_url(site_url: &str, slug: &str) -> String {
    format!("{}/{}", site_url.trim_end_matches('/'), slug)
}

fn with_params(base: &str, params: &[(&str, &str)]) -> String {
    match reqwest::Url::parse_with_params(base, params.iter().copied()) {
        Ok(u) => u.into(),
        Err(_) => base.to_string(),
    }
}

pub fn bluesky_share_url(title: &str, url: &str) -> String {
    with_params(
        "https://bsky.app/intent/compose",
        &[("text", &format!("{} {}", title, url) as &str)],
    )
}

pub fn linkedin_share_url(title: &str, excerpt: &str, url: &str) -> String {
    with_params(
        "https://www.linkedin.com/shareArticle",
        &[
            ("mini", "true"),
            ("url", url),
            ("title", title),
            ("summary", excerpt),
            ("source", "LinkedIn"),
        ],
    )
}

/// "Share" menu button. Copy link puts the URL on the clipboard; the other
/// entries open a browser tab.
pub fn share_menu(ui: &mut egui::Ui, article: &ArticleSummary, site_url: &str) {
    let url = article_url(site_url, &article.slug);
    ui.menu_button("Share", |ui| {
        if ui.button("🦋 Bluesky").clicked() {
            open_in_browser(&bluesky_share_url(&article.title, &url));
            ui.close_menu();
        }
        if ui.button("💼 LinkedIn").clicked() {
            open_in_browser(&linkedin_share_url(&article.title, &article.excerpt, &url));
            ui.close_menu();
        }
        if ui.button("🔗 Copy link").clicked() {
            ui.output_mut(|o| o.copied_text = url.clone());
            ui.close_menu();
        }
    });
}

/// Open a URL in the system default browser.
pub fn open_in_browser(url: &str) {
    #[cfg(target_os = "windows")]
    let cmd = "explorer";
    #[cfg(target_os = "macos")]
    let cmd = "open";
    #[cfg(all(unix, not(target_os = "macos")))]
    let cmd = "xdg-open";

    // No shell involved, so the URL can't be used for command injection.
    if let Err(e) = std::process::Command::new(cmd).arg(url).spawn() {
        log::error!("Failed to open browser for {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_url_joins_site_and_slug() {
        assert_eq!(
            article_url("https://example.dev/", "intro-to-caches"),
            "https://example.dev/intro-to-caches"
        );
        assert_eq!(
            article_url("https://example.dev", "intro-to-caches"),
            "https://example.dev/intro-to-caches"
        );
    }

    #[test]
    fn bluesky_url_encodes_the_text() {
        let url = bluesky_share_url("Intro to Caches", "https://example.dev/intro-to-caches");
        assert!(url.starts_with("https://bsky.app/intent/compose?text="));
        // Spaces are form-encoded as '+'.
        assert!(url.contains("Intro+to+Caches"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn linkedin_url_carries_title_and_summary() {
        let url = linkedin_share_url("Title", "A summary", "https://example.dev/slug");
        assert!(url.contains("mini=true"));
        assert!(url.contains("title=Title"));
        assert!(url.contains("summary=A+summary"));
    }
}
