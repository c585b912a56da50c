// About screen: static chrome-level page about the author.

use eframe::egui::{self, Color32, RichText};

impl super::InkpostApp {
    pub(super) fn draw_about(&mut self, ctx: &egui::Context) {
        let (author, tagline, github, bluesky, linkedin) =
            super::settings::with_settings(|st| {
                (
                    st.author_name.clone(),
                    st.blurb_short.clone(),
                    st.github_url.clone(),
                    st.bluesky_url.clone(),
                    st.linkedin_url.clone(),
                )
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(crate::ui_constants::spacing::XLARGE);
                    ui.vertical_centered(|ui| {
                        ui.heading(RichText::new(format!("Hi, I'm {}", author)).strong());
                        ui.add_space(crate::ui_constants::spacing::MEDIUM);
                        ui.label(
                            RichText::new(tagline).color(Color32::from_rgb(160, 160, 160)),
                        );
                        ui.add_space(crate::ui_constants::spacing::LARGE);
                        ui.label(format!(
                            "This is the desktop reader for {}'s blog. Browse the \
                             articles, filter them by tag or title, and leave a like \
                             on the ones you enjoy.",
                            author
                        ));
                        ui.add_space(crate::ui_constants::spacing::LARGE);
                        if !github.is_empty() {
                            ui.hyperlink_to("GitHub", github);
                        }
                        if !bluesky.is_empty() {
                            ui.hyperlink_to("Bluesky", bluesky);
                        }
                        if !linkedin.is_empty() {
                            ui.hyperlink_to("LinkedIn", linkedin);
                        }
                        ui.add_space(crate::ui_constants::spacing::LARGE);
                        ui.label(
                            RichText::new(format!("inkpost {}", env!("CARGO_PKG_VERSION")))
                                .small()
                                .weak(),
                        );
                    });
                });
        });
    }
}
