// Like-counter state: per-slug counts fetched from the like service, with
// optimistic increments reconciled against the server's reply.
//
// Increments are independent requests; nothing is deduplicated or debounced
// here. If two responses race, last write wins. Failures stay inside the
// widget: a failed fetch shows the placeholder, a failed increment rolls the
// optimistic bump back and tints the widget for a moment.

use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use super::rt;
use crate::domain::likes::LikeClient;
use crate::views::cards::LikeDisplay;

pub enum LikeMsg {
    Count { slug: String, count: u64 },
    CountFailed { slug: String },
    IncrementOk { slug: String, count: u64 },
    IncrementFailed { slug: String },
}

#[derive(Debug, Default, Clone)]
pub struct LikeEntry {
    /// None until the first fetch (or optimistic bump) lands.
    pub count: Option<u64>,
    pub fetch_failed: bool,
    /// Increment requests currently in flight.
    pub in_flight: usize,
    pub last_increment_failed: bool,
}

impl LikeEntry {
    /// Bump the displayed count before the network call resolves.
    /// Starting from an unknown count, the bump counts from zero.
    pub fn apply_optimistic(&mut self) {
        self.count = Some(self.count.unwrap_or(0) + 1);
        self.in_flight += 1;
        self.last_increment_failed = false;
    }

    /// Adopt the server's count after a successful increment.
    pub fn reconcile(&mut self, server_count: u64) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.count = Some(server_count);
        self.fetch_failed = false;
    }

    /// Undo one optimistic bump after a failed increment.
    pub fn roll_back(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.count = self.count.map(|n| n.saturating_sub(1));
        self.last_increment_failed = true;
    }

    /// Result of the initial GET. An optimistic bump that landed first is
    /// not clobbered.
    pub fn apply_fetched(&mut self, server_count: u64) {
        if self.count.is_none() {
            self.count = Some(server_count);
        }
        self.fetch_failed = false;
    }

    pub fn mark_fetch_failed(&mut self) {
        if self.count.is_none() {
            self.fetch_failed = true;
        }
    }

    pub fn display(&self) -> LikeDisplay {
        LikeDisplay {
            text: match self.count {
                Some(n) => n.to_string(),
                None => "–".to_string(),
            },
            failed: self.last_increment_failed,
        }
    }
}

pub struct LikesState {
    pub entries: HashMap<String, LikeEntry>,
    pub fetching: HashSet<String>,
    pub tx: mpsc::Sender<LikeMsg>,
    pub rx: mpsc::Receiver<LikeMsg>,
}

impl LikesState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            entries: HashMap::new(),
            fetching: HashSet::new(),
            tx,
            rx,
        }
    }

    pub fn display_for(&self, slug: &str) -> LikeDisplay {
        self.entries
            .get(slug)
            .map(|e| e.display())
            .unwrap_or_else(|| LikeEntry::default().display())
    }
}

fn like_client() -> LikeClient {
    LikeClient::new(super::settings::with_settings(|st| {
        st.likes_base_url.clone()
    }))
}

impl super::InkpostApp {
    /// Fetch the count for a slug the first time its widget shows up.
    pub(super) fn schedule_like_fetch(&mut self, ctx: &egui::Context, slug: &str) {
        if self.likes.entries.contains_key(slug) || self.likes.fetching.contains(slug) {
            return;
        }
        self.likes.fetching.insert(slug.to_string());

        let tx = self.likes.tx.clone();
        let ctx2 = ctx.clone();
        let slug = slug.to_string();
        let client = like_client();
        rt().spawn(async move {
            let msg = match client.fetch_count(&slug).await {
                Ok(count) => LikeMsg::Count { slug, count },
                Err(err) => {
                    log::warn!("like fetch failed: slug={} err={}", slug, err);
                    LikeMsg::CountFailed { slug }
                }
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }

    /// Optimistically bump the count and fire one increment request.
    pub(super) fn request_increment(&mut self, ctx: &egui::Context, slug: &str) {
        self.likes
            .entries
            .entry(slug.to_string())
            .or_default()
            .apply_optimistic();

        let tx = self.likes.tx.clone();
        let ctx2 = ctx.clone();
        let slug = slug.to_string();
        let client = like_client();
        rt().spawn(async move {
            let msg = match client.increment(&slug).await {
                Ok(count) => LikeMsg::IncrementOk { slug, count },
                Err(err) => {
                    log::warn!("like increment failed: slug={} err={}", slug, err);
                    LikeMsg::IncrementFailed { slug }
                }
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }

    pub(super) fn poll_likes(&mut self) {
        while let Ok(msg) = self.likes.rx.try_recv() {
            match msg {
                LikeMsg::Count { slug, count } => {
                    self.likes.fetching.remove(&slug);
                    self.likes.entries.entry(slug).or_default().apply_fetched(count);
                }
                LikeMsg::CountFailed { slug } => {
                    self.likes.fetching.remove(&slug);
                    self.likes.entries.entry(slug).or_default().mark_fetch_failed();
                }
                LikeMsg::IncrementOk { slug, count } => {
                    self.likes.entries.entry(slug).or_default().reconcile(count);
                }
                LikeMsg::IncrementFailed { slug } => {
                    self.likes.entries.entry(slug).or_default().roll_back();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_count_displays_the_placeholder() {
        let entry = LikeEntry::default();
        assert_eq!(entry.display().text, "–");
        assert!(!entry.display().failed);
    }

    #[test]
    fn fetch_failure_keeps_the_placeholder_not_an_error() {
        let mut entry = LikeEntry::default();
        entry.mark_fetch_failed();
        assert_eq!(entry.display().text, "–");
        assert!(entry.fetch_failed);
    }

    #[test]
    fn optimistic_increment_shows_before_the_server_replies() {
        let mut entry = LikeEntry::default();
        entry.apply_fetched(10);
        entry.apply_optimistic();
        assert_eq!(entry.display().text, "11");
        assert_eq!(entry.in_flight, 1);
    }

    #[test]
    fn reconcile_adopts_the_server_count() {
        let mut entry = LikeEntry::default();
        entry.apply_fetched(10);
        entry.apply_optimistic();
        // Someone else liked meanwhile; the server knows better.
        entry.reconcile(13);
        assert_eq!(entry.display().text, "13");
        assert_eq!(entry.in_flight, 0);
    }

    #[test]
    fn failed_increment_rolls_back_and_flags_the_widget() {
        let mut entry = LikeEntry::default();
        entry.apply_fetched(10);
        entry.apply_optimistic();
        entry.roll_back();
        assert_eq!(entry.display().text, "10");
        assert!(entry.display().failed);
    }

    #[test]
    fn increments_before_the_first_fetch_count_from_zero() {
        let mut entry = LikeEntry::default();
        entry.apply_optimistic();
        assert_eq!(entry.display().text, "1");
        // A late fetch result must not clobber the optimistic state.
        entry.apply_fetched(41);
        assert_eq!(entry.display().text, "1");
        entry.reconcile(42);
        assert_eq!(entry.display().text, "42");
    }

    #[test]
    fn rapid_increments_are_tracked_independently() {
        let mut entry = LikeEntry::default();
        entry.apply_fetched(0);
        entry.apply_optimistic();
        entry.apply_optimistic();
        entry.apply_optimistic();
        assert_eq!(entry.display().text, "3");
        assert_eq!(entry.in_flight, 3);
        entry.reconcile(1);
        entry.reconcile(2);
        // Last write wins.
        entry.reconcile(3);
        assert_eq!(entry.display().text, "3");
        assert_eq!(entry.in_flight, 0);
    }
}
