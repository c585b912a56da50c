// Client-side filtering over the loaded article list. This is a pure
// derivation recomputed on every change (every frame, in immediate mode),
// not an incrementally updated cache.

use super::article::ArticleSummary;

/// Filter state owned by the home screen. Created empty on navigation to
/// home and discarded on navigation away. `selected_tags` keeps insertion
/// order; that order only matters for displaying active-filter chips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    selected_tags: Vec<String>,
    search_text: String,
}

impl FilterState {
    /// Add `tag` if absent, remove it if present. No cardinality cap.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    /// Replace the search text verbatim; no trimming.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn search_text_mut(&mut self) -> &mut String {
        &mut self.search_text
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_tags.is_empty() && self.search_text.is_empty()
    }

    /// An article matches iff (search empty OR title contains it,
    /// case-insensitively) AND (no tags selected OR tags intersect the
    /// selection). Selected tags combine with OR semantics.
    pub fn matches(&self, article: &ArticleSummary) -> bool {
        let title_ok = self.search_text.is_empty()
            || article
                .title
                .to_lowercase()
                .contains(&self.search_text.to_lowercase());
        let tags_ok = self.selected_tags.is_empty()
            || article.tags.iter().any(|t| self.is_selected(t));
        title_ok && tags_ok
    }
}

/// Ordered subsequence of `articles` matching `state`. Stable and
/// deterministic: relative order of the input is preserved.
pub fn derive_filtered_list(
    articles: &[ArticleSummary],
    state: &FilterState,
) -> Vec<ArticleSummary> {
    articles
        .iter()
        .filter(|a| state.matches(a))
        .cloned()
        .collect()
}

/// Deduplicated tag vocabulary across `articles`, in first-seen order.
pub fn derive_tag_vocabulary(articles: &[ArticleSummary]) -> Vec<String> {
    let mut vocab: Vec<String> = Vec::new();
    for article in articles {
        for tag in &article.tags {
            if !vocab.contains(tag) {
                vocab.push(tag.clone());
            }
        }
    }
    vocab
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn article(title: &str, tags: &[&str]) -> ArticleSummary {
        ArticleSummary {
            slug: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            excerpt: String::new(),
            cover: String::new(),
            reading_time: 1,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn fixture() -> Vec<ArticleSummary> {
        vec![
            article("Intro to Caches", &["systems"]),
            article("Web Basics", &["web"]),
        ]
    }

    #[test]
    fn empty_filter_matches_all_in_order() {
        let articles = fixture();
        let out = derive_filtered_list(&articles, &FilterState::default());
        assert_eq!(out, articles);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let articles = fixture();
        let mut state = FilterState::default();
        state.set_search_text("intro");
        let out = derive_filtered_list(&articles, &state);
        assert_eq!(out, vec![articles[0].clone()]);
    }

    #[test]
    fn selected_tag_narrows_the_list() {
        let articles = fixture();
        let mut state = FilterState::default();
        state.toggle_tag("web");
        let out = derive_filtered_list(&articles, &state);
        assert_eq!(out, vec![articles[1].clone()]);
    }

    #[test]
    fn unmatched_search_yields_empty_not_error() {
        let articles = fixture();
        let mut state = FilterState::default();
        state.set_search_text("zzz");
        assert!(derive_filtered_list(&articles, &state).is_empty());
    }

    #[test]
    fn selected_tags_combine_with_or() {
        let articles = fixture();
        let mut state = FilterState::default();
        state.toggle_tag("systems");
        state.toggle_tag("web");
        let out = derive_filtered_list(&articles, &state);
        assert_eq!(out, articles);
    }

    #[test]
    fn search_and_tags_combine_with_and() {
        let articles = fixture();
        let mut state = FilterState::default();
        state.toggle_tag("web");
        state.set_search_text("intro");
        assert!(derive_filtered_list(&articles, &state).is_empty());
    }

    #[test]
    fn filtered_list_is_a_subsequence_preserving_order() {
        let mut articles = fixture();
        articles.push(article("Intro to Tracing", &["systems", "observability"]));
        let mut state = FilterState::default();
        state.set_search_text("intro");
        let out = derive_filtered_list(&articles, &state);
        assert_eq!(out, vec![articles[0].clone(), articles[2].clone()]);
    }

    #[test]
    fn derivation_is_deterministic() {
        let articles = fixture();
        let mut state = FilterState::default();
        state.toggle_tag("systems");
        state.set_search_text("ca");
        let a = derive_filtered_list(&articles, &state);
        let b = derive_filtered_list(&articles, &state);
        assert_eq!(a, b);
    }

    #[test]
    fn toggling_a_tag_twice_restores_the_selection() {
        let mut state = FilterState::default();
        state.toggle_tag("rust");
        let snapshot = state.clone();
        state.toggle_tag("go");
        state.toggle_tag("go");
        assert_eq!(state, snapshot);
    }

    #[test]
    fn clear_search_is_the_unfiltered_view() {
        let articles = fixture();
        let mut state = FilterState::default();
        state.set_search_text("zzz");
        state.clear_search();
        assert_eq!(derive_filtered_list(&articles, &state), articles);
    }

    #[test]
    fn vocabulary_dedupes_and_keeps_first_seen_order() {
        let articles = vec![
            article("A", &["go", "rust"]),
            article("B", &["go", "ts"]),
        ];
        assert_eq!(derive_tag_vocabulary(&articles), vec!["go", "rust", "ts"]);
    }

    #[test]
    fn vocabulary_dedupes_within_one_article() {
        let articles = vec![article("A", &["go", "go"])];
        assert_eq!(derive_tag_vocabulary(&articles), vec!["go"]);
    }
}
