// Client for the external like service.
//
//   GET  {base}/likes/{slug}            -> { "count": n }
//   POST {base}/likes/{slug}/increment  -> { "count": n }
//
// Any non-2xx response or network error surfaces as LikeError; the caller
// (the like-counter widget state) recovers locally and never lets it reach
// the page level.

use std::fmt;

use serde::Deserialize;

use super::CLIENT;

#[derive(Debug)]
pub enum LikeError {
    Request(reqwest::Error),
    Status(u16),
}

impl fmt::Display for LikeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LikeError::Request(e) => write!(f, "Like request error: {}", e),
            LikeError::Status(code) => write!(f, "Like service returned status {}", code),
        }
    }
}

impl std::error::Error for LikeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LikeError::Request(e) => Some(e),
            LikeError::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for LikeError {
    fn from(e: reqwest::Error) -> Self {
        LikeError::Request(e)
    }
}

#[derive(Debug, Deserialize)]
struct CountMsg {
    count: u64,
}

#[derive(Debug, Clone)]
pub struct LikeClient {
    base_url: String,
}

impl LikeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn count_url(&self, slug: &str) -> String {
        format!("{}/likes/{}", self.base_url, slug)
    }

    fn increment_url(&self, slug: &str) -> String {
        format!("{}/likes/{}/increment", self.base_url, slug)
    }

    pub async fn fetch_count(&self, slug: &str) -> Result<u64, LikeError> {
        let resp = CLIENT.get(self.count_url(slug)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LikeError::Status(status.as_u16()));
        }
        let msg: CountMsg = resp.json().await?;
        Ok(msg.count)
    }

    /// One independent increment request. Requests are not deduplicated or
    /// debounced here; exact-once semantics are the service's concern.
    pub async fn increment(&self, slug: &str) -> Result<u64, LikeError> {
        let resp = CLIENT.post(self.increment_url(slug)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LikeError::Status(status.as_u16()));
        }
        let msg: CountMsg = resp.json().await?;
        Ok(msg.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_service_contract() {
        let client = LikeClient::new("https://example.dev/api");
        assert_eq!(
            client.count_url("intro-to-caches"),
            "https://example.dev/api/likes/intro-to-caches"
        );
        assert_eq!(
            client.increment_url("intro-to-caches"),
            "https://example.dev/api/likes/intro-to-caches/increment"
        );
    }

    #[test]
    fn trailing_slashes_in_the_base_are_tolerated() {
        let client = LikeClient::new("https://example.dev/api/");
        assert_eq!(client.count_url("a"), "https://example.dev/api/likes/a");
    }

    #[test]
    fn count_payload_parses() {
        let msg: CountMsg = serde_json::from_str(r#"{ "count": 42 }"#).unwrap();
        assert_eq!(msg.count, 42);
    }
}
