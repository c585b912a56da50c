use crate::domain::article::ArticleSummary;
use crate::views::filters::EnumWithAlternativeNames;

/// Ordering of the full article list on the home screen. The source gives
/// no ordering guarantee, so the app sorts before filtering; the filtered
/// view then preserves whatever order was applied here.
#[derive(strum::EnumCount, strum::EnumIter, PartialEq, Clone, Copy, strum::Display, Default, Debug)]
pub enum Sorting {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl EnumWithAlternativeNames for Sorting {
    fn alternative_name(&self) -> &'static str {
        use Sorting::*;
        match self {
            Newest => "🕓 NEWEST",
            Oldest => "🕰 OLDEST",
            Title => "🔤 TITLE",
        }
    }
}

impl Sorting {
    pub fn apply(&self, list: &mut [ArticleSummary]) {
        match self {
            Sorting::Newest => list.sort_by(|a, b| b.published.cmp(&a.published)),
            Sorting::Oldest => list.sort_by(|a, b| a.published.cmp(&b.published)),
            Sorting::Title => {
                list.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summary(title: &str, published: (i32, u32, u32)) -> ArticleSummary {
        ArticleSummary {
            slug: title.to_lowercase(),
            title: title.to_string(),
            excerpt: String::new(),
            cover: String::new(),
            reading_time: 1,
            tags: Vec::new(),
            published: NaiveDate::from_ymd_opt(published.0, published.1, published.2).unwrap(),
        }
    }

    #[test]
    fn newest_sorts_reverse_chronologically() {
        let mut list = vec![
            summary("Old", (2022, 1, 1)),
            summary("New", (2024, 6, 1)),
            summary("Mid", (2023, 3, 1)),
        ];
        Sorting::Newest.apply(&mut list);
        let titles: Vec<&str> = list.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn title_sorts_case_insensitively() {
        let mut list = vec![
            summary("banana", (2022, 1, 1)),
            summary("Apple", (2024, 6, 1)),
        ];
        Sorting::Title.apply(&mut list);
        assert_eq!(list[0].title, "Apple");
    }
}
