//! TMDB (The Movie Database) API client
//!
//! One operation: multi-search, first page only. Person entries are filtered
//! out and the result list is capped at [`RESULT_CAP`]. No retries and no
//! caching; a failed call surfaces once and the caller re-enables input.

use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::{MediaType, SearchResult};

/// Maximum number of results kept from one search
pub const RESULT_CAP: usize = 20;

/// Search error taxonomy
///
/// `MissingCredential` is the configuration failure (raised before any
/// request); the remaining variants are the remote failures.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no TMDB API key configured (set TMDB_API_KEY or add api_key to the config file)")]
    MissingCredential,

    #[error("search failed with status {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// TMDB API client
#[derive(Clone)]
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.themoviedb.org/3")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Search movies and TV shows.
    ///
    /// Returns at most [`RESULT_CAP`] non-person items in upstream order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!(
            "{}/search/multi?api_key={}&query={}&page=1",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(query)
        );

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let parsed: SearchResponse = serde_json::from_str(&body)
                    .map_err(|e| SearchError::InvalidResponse(format!("JSON parse error: {}", e)))?;
                Ok(parsed.into_results())
            }
            status => Err(SearchError::Status(status.as_u16())),
        }
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResultRaw>,
}

impl SearchResponse {
    fn into_results(self) -> Vec<SearchResult> {
        self.results
            .into_iter()
            .filter_map(|r| r.into_search_result())
            .take(RESULT_CAP)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResultRaw {
    id: u64,
    media_type: Option<String>,
    // Movies use "title", TV uses "name"
    title: Option<String>,
    name: Option<String>,
    // Movies use "release_date", TV uses "first_air_date"
    release_date: Option<String>,
    first_air_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    profile_path: Option<String>,
    vote_average: Option<f32>,
    popularity: Option<f32>,
}

impl SearchResultRaw {
    /// Convert a raw item, dropping only `person` entries
    fn into_search_result(self) -> Option<SearchResult> {
        let media_type = match self.media_type.as_deref() {
            Some("person") => return None,
            Some("movie") => MediaType::Movie,
            Some("tv") => MediaType::Tv,
            _ => MediaType::Other,
        };

        let title = self
            .title
            .or(self.name)
            .unwrap_or_else(|| "(no title)".to_string());
        let date_str = self.release_date.or(self.first_air_date);
        let year = date_str.as_deref().and_then(extract_year);

        Some(SearchResult {
            id: self.id,
            media_type,
            title,
            year,
            overview: self.overview.filter(|s| !s.is_empty()),
            poster_path: self.poster_path.or(self.profile_path),
            vote_average: self.vote_average,
            popularity: self.popularity,
        })
    }
}

/// Extract year from a date string like "2022-03-04"
fn extract_year(date: &str) -> Option<u16> {
    if date.len() >= 4 {
        date[..4].parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(media_type: Option<&str>) -> SearchResultRaw {
        SearchResultRaw {
            id: 1,
            media_type: media_type.map(String::from),
            title: Some("Test".to_string()),
            name: None,
            release_date: Some("2022-01-01".to_string()),
            first_air_date: None,
            overview: Some("text".to_string()),
            poster_path: None,
            profile_path: None,
            vote_average: None,
            popularity: None,
        }
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("2022-03-04"), Some(2022));
        assert_eq!(extract_year("2019-11-12"), Some(2019));
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("abc"), None);
    }

    #[test]
    fn test_person_filter() {
        assert!(raw(Some("movie")).into_search_result().is_some());
        assert!(raw(Some("tv")).into_search_result().is_some());
        assert!(raw(Some("person")).into_search_result().is_none());
    }

    #[test]
    fn test_only_person_excluded() {
        // Anything that is not a person stays in the list
        let kept = raw(Some("collection")).into_search_result().unwrap();
        assert_eq!(kept.media_type, MediaType::Other);

        let untyped = raw(None).into_search_result().unwrap();
        assert_eq!(untyped.media_type, MediaType::Other);
    }

    #[test]
    fn test_title_fallback() {
        let mut r = raw(Some("tv"));
        r.title = None;
        r.name = Some("Show Name".to_string());
        assert_eq!(r.into_search_result().unwrap().title, "Show Name");

        let mut r = raw(Some("movie"));
        r.title = None;
        assert_eq!(r.into_search_result().unwrap().title, "(no title)");
    }

    #[test]
    fn test_profile_path_fallback() {
        let mut r = raw(Some("movie"));
        r.profile_path = Some("/face.jpg".to_string());
        assert_eq!(
            r.into_search_result().unwrap().poster_path.as_deref(),
            Some("/face.jpg")
        );
    }

    #[test]
    fn test_result_cap() {
        let response = SearchResponse {
            results: (0..30).map(|_| raw(Some("movie"))).collect(),
        };
        assert_eq!(response.into_results().len(), RESULT_CAP);
    }

    #[test]
    fn test_cap_applies_after_person_filter() {
        // 25 raw with 3 persons: 22 eligible, capped at 20
        let mut items: Vec<SearchResultRaw> = (0..22).map(|_| raw(Some("movie"))).collect();
        items.insert(0, raw(Some("person")));
        items.insert(10, raw(Some("person")));
        items.push(raw(Some("person")));
        let response = SearchResponse { results: items };
        assert_eq!(response.into_results().len(), RESULT_CAP);
    }
}
