// App state split out of app.rs: routing, home-screen state, async fetch
// wiring and the cover texture cache.

use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use crate::domain::article::{Article, ArticleSummary};
use crate::domain::filter::FilterState;
use crate::domain::repo::RepoError;
use crate::types::Sorting;

/// The routing surface: one home route (optionally prefilled with a search
/// string), one route per article slug, one static about route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Article(String),
    About,
}

/// Everything the article screen needs: the article plus its related cards.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub article: Article,
    pub related: Vec<ArticleSummary>,
}

pub enum RepoMsg {
    /// Full article list, mapped to summaries.
    List(Result<Vec<ArticleSummary>, RepoError>),
    /// One article page; `req_id` drops stale results after fast navigation.
    Page {
        req_id: u64,
        result: Result<ArticlePage, RepoError>,
    },
}

/// Messages for cover loading.
pub enum CoverMsg {
    Ok {
        slug: String,
        w: usize,
        h: usize,
        rgba: Vec<u8>,
    },
    Err {
        slug: String,
    },
}

/// Home-screen state. The filter is owned exclusively by this struct; it is
/// created empty on navigation to home and discarded on navigation away.
pub struct HomeState {
    pub sort: Sorting,
    pub filter: FilterState,
}

impl HomeState {
    pub fn new(initial_search: Option<String>) -> Self {
        let mut filter = FilterState::default();
        if let Some(text) = initial_search {
            filter.set_search_text(text);
        }
        Self {
            sort: Sorting::default(),
            filter,
        }
    }
}

pub struct NetState {
    /// Request id for article-page loads; stale responses are ignored.
    pub counter: u64,
    pub list_loading: bool,
    pub summaries: Option<Vec<ArticleSummary>>,
    pub list_error: Option<String>,
    pub page_loading: bool,
    pub page: Option<ArticlePage>,
    pub page_error: Option<String>,
    pub tx: mpsc::Sender<RepoMsg>,
    pub rx: mpsc::Receiver<RepoMsg>,
}

impl NetState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            counter: 0,
            list_loading: false,
            summaries: None,
            list_error: None,
            page_loading: false,
            page: None,
            page_error: None,
            tx,
            rx,
        }
    }
}

pub struct ImagesState {
    pub covers: HashMap<String, egui::TextureHandle>,
    pub covers_loading: HashSet<String>,
    pub cover_tx: mpsc::Sender<CoverMsg>,
    pub cover_rx: mpsc::Receiver<CoverMsg>,
}

impl ImagesState {
    pub fn new() -> Self {
        let (cover_tx, cover_rx) = mpsc::channel();
        Self {
            covers: HashMap::new(),
            covers_loading: HashSet::new(),
            cover_tx,
            cover_rx,
        }
    }
}
