// Async data loading: the article list, single article pages, and cover
// images. Everything runs on the shared tokio runtime and reports back over
// the channels in NetState/ImagesState; the UI thread never blocks.

use eframe::egui;

use super::rt;
use super::state::{ArticlePage, CoverMsg, RepoMsg};
use crate::domain::article::ArticleSummary;
use crate::domain::repo::{ArticleRepo, FsArticleRepo, RepoError};

fn join_error(e: tokio::task::JoinError) -> RepoError {
    RepoError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

impl super::InkpostApp {
    /// Start the one-per-load fetch of the full article collection.
    pub(super) fn start_load_articles(&mut self, ctx: &egui::Context) {
        self.net.list_loading = true;
        self.net.list_error = None;
        ctx.request_repaint();

        let tx = self.net.tx.clone();
        let ctx2 = ctx.clone();
        let root = super::settings::with_settings(|st| st.content_dir.clone());

        rt().spawn(async move {
            let res = tokio::task::spawn_blocking(move || {
                let repo = FsArticleRepo::new(root);
                repo.all_articles()
                    .map(|articles| -> Vec<ArticleSummary> {
                        articles.into_iter().map(|a| a.summary).collect()
                    })
            })
            .await
            .unwrap_or_else(|e| Err(join_error(e)));

            if let Err(err) = &res {
                log::error!("Error loading article list: {err}");
            }
            let _ = tx.send(RepoMsg::List(res));
            ctx2.request_repaint();
        });
    }

    /// Load one article page (article + related cards) for the given slug.
    /// A missing slug is a hard failure surfaced on the article screen.
    pub(super) fn start_load_page(&mut self, ctx: &egui::Context, slug: String) {
        self.net.page_loading = true;
        self.net.page = None;
        self.net.page_error = None;
        ctx.request_repaint();

        self.net.counter = self.net.counter.wrapping_add(1);
        let req_id = self.net.counter;

        let tx = self.net.tx.clone();
        let ctx2 = ctx.clone();
        let root = super::settings::with_settings(|st| st.content_dir.clone());

        rt().spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let repo = FsArticleRepo::new(root);
                let article = repo.article_by_slug(&slug)?;
                let related: Vec<ArticleSummary> = repo
                    .related_articles(&slug)?
                    .into_iter()
                    .map(|a| a.summary)
                    .collect();
                Ok(ArticlePage { article, related })
            })
            .await
            .unwrap_or_else(|e| Err(join_error(e)));

            if let Err(err) = &result {
                log::error!("Error loading article page: {err}");
            }
            let _ = tx.send(RepoMsg::Page { req_id, result });
            ctx2.request_repaint();
        });
    }

    /// Schedule cover loads for every summary currently on screen.
    /// Idempotent: already-loaded and in-flight covers are skipped.
    pub(super) fn schedule_cover_loads(&mut self, ctx: &egui::Context) {
        let mut wanted: Vec<(String, String)> = Vec::new();
        let mut collect = |s: &ArticleSummary| {
            if !s.cover.is_empty() {
                wanted.push((s.slug.clone(), s.cover.clone()));
            }
        };
        if let Some(summaries) = &self.net.summaries {
            summaries.iter().for_each(&mut collect);
        }
        if let Some(page) = &self.net.page {
            collect(&page.article.summary);
            page.related.iter().for_each(&mut collect);
        }

        let content_dir = super::settings::with_settings(|st| st.content_dir.clone());
        for (slug, cover) in wanted {
            if self.images.covers.contains_key(&slug) || self.images.covers_loading.contains(&slug)
            {
                continue;
            }
            self.images.covers_loading.insert(slug.clone());

            let tx = self.images.cover_tx.clone();
            let ctx2 = ctx.clone();
            let dir = content_dir.clone();
            log::debug!("cover schedule: slug={} ref={}", slug, cover);
            rt().spawn(async move {
                let msg = match crate::domain::cover::load_cover_image(&cover, &dir).await {
                    Ok((w, h, rgba)) => CoverMsg::Ok { slug, w, h, rgba },
                    Err(err) => {
                        log::warn!("cover load failed: slug={} err={}", slug, err);
                        CoverMsg::Err { slug }
                    }
                };
                let _ = tx.send(msg);
                ctx2.request_repaint();
            });
        }
    }

    /// Poll incoming async messages and update state accordingly.
    pub(super) fn poll_incoming(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.net.rx.try_recv() {
            match msg {
                RepoMsg::List(res) => {
                    self.net.list_loading = false;
                    match res {
                        Ok(mut summaries) => {
                            self.home.sort.apply(&mut summaries);
                            self.net.list_error = None;
                            self.net.summaries = Some(summaries);
                            self.schedule_cover_loads(ctx);
                        }
                        Err(e) => {
                            self.net.summaries = None;
                            self.net.list_error = Some(e.to_string());
                        }
                    }
                }
                RepoMsg::Page { req_id, result } => {
                    // Ignore stale results after fast navigation.
                    if req_id != self.net.counter {
                        continue;
                    }
                    self.net.page_loading = false;
                    match result {
                        Ok(page) => {
                            self.net.page_error = None;
                            self.net.page = Some(page);
                            self.schedule_cover_loads(ctx);
                        }
                        Err(e) => {
                            self.net.page = None;
                            self.net.page_error = Some(e.to_string());
                        }
                    }
                }
            }
        }

        while let Ok(msg) = self.images.cover_rx.try_recv() {
            match msg {
                CoverMsg::Ok { slug, w, h, rgba } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba);
                    let tex = ctx.load_texture(
                        format!("cover_{}", slug),
                        image,
                        egui::TextureOptions::default(),
                    );
                    self.images.covers_loading.remove(&slug);
                    self.images.covers.insert(slug, tex);
                }
                CoverMsg::Err { slug } => {
                    // Leave the placeholder; the warn was already logged.
                    self.images.covers_loading.remove(&slug);
                }
            }
        }
    }
}
