// App logic lives here, out of main.rs. InkpostApp owns the current screen,
// the home filter state, the async fetch wiring and the per-slug like
// state; drawing is dispatched per screen from update().

use eframe::{egui, App};
use egui_commonmark::CommonMarkCache;

mod about_ui;
mod article_ui;
mod fetch;
mod grid;
mod home_ui;
mod likes;
mod logs_ui;
mod runtime;
pub mod settings;
mod state;

pub use runtime::rt;

use likes::LikesState;
use state::{HomeState, ImagesState, NetState, Screen};

pub struct InkpostApp {
    screen: Screen,
    /// Navigation requested by widgets this frame; applied once at the end.
    nav: Option<Screen>,
    home: HomeState,
    net: NetState,
    images: ImagesState,
    likes: LikesState,
    md_cache: CommonMarkCache,
}

impl InkpostApp {
    /// `initial_search` mirrors the web version's `?search=` parameter on
    /// the home route.
    pub fn new(initial_search: Option<String>) -> Self {
        Self {
            screen: Screen::Home,
            nav: None,
            home: HomeState::new(initial_search),
            net: NetState::new(),
            images: ImagesState::new(),
            likes: LikesState::new(),
            md_cache: CommonMarkCache::default(),
        }
    }

    /// Apply a navigation request: reset per-screen state and kick off the
    /// loads the target screen needs. The home filter is created empty on
    /// entry and discarded on leave.
    fn navigate(&mut self, ctx: &egui::Context, target: Screen) {
        if target == self.screen {
            return;
        }
        match &target {
            Screen::Home => {
                self.home = HomeState::new(None);
                self.net.page = None;
                self.net.page_error = None;
            }
            Screen::Article(slug) => {
                self.start_load_page(ctx, slug.clone());
            }
            Screen::About => {}
        }
        self.screen = target;
        ctx.request_repaint();
    }
}

impl App for InkpostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the logs window fresh.
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        self.poll_incoming(ctx);
        self.poll_likes();

        // First frame: load the article collection once.
        if self.net.summaries.is_none() && !self.net.list_loading && self.net.list_error.is_none()
        {
            self.start_load_articles(ctx);
        }

        let header = crate::views::chrome::draw_header(ctx);
        if header.home_clicked {
            self.nav = Some(Screen::Home);
        }
        if header.about_clicked {
            self.nav = Some(Screen::About);
        }
        if header.settings_clicked {
            settings::open_settings();
            ctx.request_repaint();
        }
        if header.logs_clicked {
            logs_ui::open_logs();
            ctx.request_repaint();
        }
        crate::views::chrome::draw_footer(ctx);

        match self.screen.clone() {
            Screen::Home => self.draw_home(ctx),
            Screen::Article(_) => self.draw_article(ctx),
            Screen::About => self.draw_about(ctx),
        }

        // Settings and logs windows (separate OS viewports).
        settings::draw_settings_viewport(ctx);
        logs_ui::draw_logs_viewport(ctx);

        if let Some(target) = self.nav.take() {
            self.navigate(ctx, target);
        }
    }
}
