use chrono::NaiveDate;
use serde::Deserialize;

/// Words per minute assumed by the reading-time estimate.
const READING_WPM: usize = 200;

/// Everything a card needs to render an article: the full record minus the
/// markdown body. `tags` keeps source order and may repeat within one
/// article; the vocabulary derivation dedupes across the collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Cover reference: an http(s) URL or a path relative to the content dir.
    /// Empty means "no cover"; the card keeps its placeholder.
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: NaiveDate,
}

/// A full article as served by the repo: summary fields plus markdown body.
#[derive(Debug, Clone)]
pub struct Article {
    pub summary: ArticleSummary,
    pub body: String,
}

impl Article {
    pub fn slug(&self) -> &str {
        &self.summary.slug
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }
}

/// Estimate reading time in whole minutes from a markdown body.
/// Rounds up, so any non-empty body is at least one minute.
pub fn estimate_reading_time(body: &str) -> u32 {
    let words = body.split_whitespace().count();
    ((words + READING_WPM - 1) / READING_WPM) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_reads_in_zero_minutes() {
        assert_eq!(estimate_reading_time(""), 0);
        assert_eq!(estimate_reading_time("   \n\t "), 0);
    }

    #[test]
    fn short_body_rounds_up_to_one_minute() {
        assert_eq!(estimate_reading_time("just a few words"), 1);
    }

    #[test]
    fn long_body_rounds_up() {
        // 201 words at 200 wpm -> 2 minutes
        let body = vec!["word"; 201].join(" ");
        assert_eq!(estimate_reading_time(&body), 2);
        let body = vec!["word"; 400].join(" ");
        assert_eq!(estimate_reading_time(&body), 2);
    }
}
