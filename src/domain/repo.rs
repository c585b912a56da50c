// Article repo: read-only source of articles.
// The filesystem implementation reads a content directory holding an
// `articles.json` index plus one markdown body file per article.
//
// The source guarantees no particular ordering; callers sort by published
// date when they need a chronological view.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use super::article::{estimate_reading_time, Article, ArticleSummary};

/// Index file name inside the content directory.
pub const INDEX_FILE: &str = "articles.json";

/// Cap on the number of related articles returned per article.
pub const MAX_RELATED: usize = 3;

#[derive(Debug)]
pub enum RepoError {
    Io(std::io::Error),
    /// Malformed `articles.json`.
    Index(serde_json::Error),
    /// A requested slug has no article. This is an invariant violation for
    /// the article screen, not a state to render around.
    MissingArticle(String),
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoError::Io(e) => write!(f, "Content read error: {}", e),
            RepoError::Index(e) => write!(f, "Invalid article index: {}", e),
            RepoError::MissingArticle(slug) => write!(f, "Missing article: {}", slug),
        }
    }
}

impl std::error::Error for RepoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepoError::Io(e) => Some(e),
            RepoError::Index(e) => Some(e),
            RepoError::MissingArticle(_) => None,
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(e: std::io::Error) -> Self {
        RepoError::Io(e)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(e: serde_json::Error) -> Self {
        RepoError::Index(e)
    }
}

/// Read-only query contract over the article collection.
pub trait ArticleRepo {
    fn all_slugs(&self) -> Result<Vec<String>, RepoError>;
    fn all_articles(&self) -> Result<Vec<Article>, RepoError>;
    fn article_by_slug(&self, slug: &str) -> Result<Article, RepoError>;
    fn related_articles(&self, slug: &str) -> Result<Vec<Article>, RepoError>;
}

/// One entry of `articles.json`.
#[derive(Debug, Deserialize)]
struct IndexEntry {
    slug: String,
    title: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    cover: String,
    #[serde(default)]
    tags: Vec<String>,
    published: NaiveDate,
    /// Explicit override; computed from the body when absent.
    #[serde(default)]
    reading_time: Option<u32>,
    /// Body file name; defaults to `<slug>.md`.
    #[serde(default)]
    body: Option<String>,
}

pub struct FsArticleRepo {
    root: PathBuf,
}

impl FsArticleRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_index(&self) -> Result<Vec<IndexEntry>, RepoError> {
        let data = std::fs::read_to_string(self.root.join(INDEX_FILE))?;
        Ok(serde_json::from_str(&data)?)
    }

    fn load_article(&self, entry: IndexEntry) -> Result<Article, RepoError> {
        let body_file = entry
            .body
            .clone()
            .unwrap_or_else(|| format!("{}.md", entry.slug));
        let body = std::fs::read_to_string(self.root.join(body_file))?;
        let reading_time = entry
            .reading_time
            .unwrap_or_else(|| estimate_reading_time(&body));
        Ok(Article {
            summary: ArticleSummary {
                slug: entry.slug,
                title: entry.title,
                excerpt: entry.excerpt,
                cover: entry.cover,
                reading_time,
                tags: entry.tags,
                published: entry.published,
            },
            body,
        })
    }
}

impl ArticleRepo for FsArticleRepo {
    fn all_slugs(&self) -> Result<Vec<String>, RepoError> {
        Ok(self.load_index()?.into_iter().map(|e| e.slug).collect())
    }

    fn all_articles(&self) -> Result<Vec<Article>, RepoError> {
        self.load_index()?
            .into_iter()
            .map(|e| self.load_article(e))
            .collect()
    }

    fn article_by_slug(&self, slug: &str) -> Result<Article, RepoError> {
        let entry = self
            .load_index()?
            .into_iter()
            .find(|e| e.slug == slug)
            .ok_or_else(|| RepoError::MissingArticle(slug.to_string()))?;
        self.load_article(entry)
    }

    /// Articles sharing at least one tag with `slug`, newest first, capped
    /// at MAX_RELATED, the article itself excluded. Falls back to the newest
    /// other articles when nothing shares a tag, so the section never sits
    /// empty on a populated blog.
    fn related_articles(&self, slug: &str) -> Result<Vec<Article>, RepoError> {
        let target = self.article_by_slug(slug)?;
        let mut others: Vec<Article> = self
            .all_articles()?
            .into_iter()
            .filter(|a| a.slug() != slug)
            .collect();
        others.sort_by(|a, b| b.summary.published.cmp(&a.summary.published));

        let mut related: Vec<Article> = others
            .iter()
            .filter(|a| {
                a.summary
                    .tags
                    .iter()
                    .any(|t| target.summary.tags.contains(t))
            })
            .cloned()
            .collect();
        if related.is_empty() {
            related = others;
        }
        related.truncate(MAX_RELATED);
        Ok(related)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> FsArticleRepo {
        FsArticleRepo::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("content"))
    }

    #[test]
    fn loads_all_articles_from_fixture_content() {
        let articles = repo().all_articles().expect("fixture content loads");
        assert!(!articles.is_empty());
        for a in &articles {
            assert!(!a.slug().is_empty());
            assert!(!a.body.is_empty());
            assert!(a.summary.reading_time >= 1);
        }
    }

    #[test]
    fn slugs_match_the_index() {
        let repo = repo();
        let slugs = repo.all_slugs().unwrap();
        let articles = repo.all_articles().unwrap();
        let from_articles: Vec<String> =
            articles.iter().map(|a| a.slug().to_string()).collect();
        assert_eq!(slugs, from_articles);
    }

    #[test]
    fn article_by_slug_returns_the_full_record() {
        let repo = repo();
        let first = repo.all_slugs().unwrap().remove(0);
        let article = repo.article_by_slug(&first).unwrap();
        assert_eq!(article.slug(), first);
    }

    #[test]
    fn missing_slug_is_a_hard_error() {
        match repo().article_by_slug("no-such-article") {
            Err(RepoError::MissingArticle(slug)) => assert_eq!(slug, "no-such-article"),
            other => panic!("expected MissingArticle, got {:?}", other.map(|a| a.slug().to_string())),
        }
    }

    #[test]
    fn related_articles_exclude_self_and_respect_the_cap() {
        let repo = repo();
        for slug in repo.all_slugs().unwrap() {
            let related = repo.related_articles(&slug).unwrap();
            assert!(related.len() <= MAX_RELATED);
            assert!(related.iter().all(|a| a.slug() != slug));
        }
    }

    #[test]
    fn related_articles_are_newest_first() {
        let repo = repo();
        let first = repo.all_slugs().unwrap().remove(0);
        let related = repo.related_articles(&first).unwrap();
        for pair in related.windows(2) {
            assert!(pair[0].summary.published >= pair[1].summary.published);
        }
    }
}
