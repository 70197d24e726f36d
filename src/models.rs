//! Data structures for kiosktui
//!
//! One search call produces a batch of [`SearchResult`] items; everything the
//! card renderer and detail view show is a projection of these. Results are
//! read-only and replaced wholesale on the next search.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL for poster images (fixed, per the TMDB image CDN)
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w300";

/// Maximum characters of overview text shown on a card
pub const EXCERPT_MAX_LEN: usize = 240;

// =============================================================================
// Media Type
// =============================================================================

/// Media type discriminator for search results
///
/// Multi-search returns heterogeneous items; `person` entries are dropped at
/// deserialization and anything else unrecognized lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Other,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Movie => write!(f, "Movie"),
            MediaType::Tv => write!(f, "TV Show"),
            MediaType::Other => write!(f, "Other"),
        }
    }
}

// =============================================================================
// Search Result
// =============================================================================

/// One item from the multi-search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub media_type: MediaType,
    pub title: String,
    pub year: Option<u16>,
    /// Single optional description field
    pub overview: Option<String>,
    /// Poster path relative to [`POSTER_BASE_URL`]
    pub poster_path: Option<String>,
    pub vote_average: Option<f32>,
    pub popularity: Option<f32>,
}

impl SearchResult {
    /// Overview text truncated for card display, with a trailing ellipsis
    /// marker when anything was cut.
    pub fn excerpt(&self) -> String {
        let text = self.overview.as_deref().unwrap_or("");
        if text.chars().count() > EXCERPT_MAX_LEN {
            let cut: String = text.chars().take(EXCERPT_MAX_LEN).collect();
            format!("{}...", cut)
        } else {
            text.to_string()
        }
    }

    /// Display rating: vote average when present, else rounded popularity,
    /// else "N/A". A zero vote average counts as absent (unrated items report
    /// 0.0 upstream).
    pub fn rating(&self) -> String {
        match self.vote_average {
            Some(v) if v > 0.0 => format!("{:.1}", v),
            _ => match self.popularity {
                Some(p) if p > 0.0 => format!("{}", p.round() as i64),
                _ => "N/A".to_string(),
            },
        }
    }

    /// Full poster URL, or `None` when the item has no image (the card then
    /// renders a placeholder rather than a dead reference).
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|p| format!("{}{}", POSTER_BASE_URL, p))
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year_str = self.year.map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(f, "{}{} [{}]", self.title, year_str, self.media_type)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn result(overview: Option<&str>) -> SearchResult {
        SearchResult {
            id: 1,
            media_type: MediaType::Movie,
            title: "The Batman".to_string(),
            year: Some(2022),
            overview: overview.map(String::from),
            poster_path: None,
            vote_average: Some(7.8),
            popularity: Some(123.4),
        }
    }

    #[test]
    fn test_media_type_serde() {
        let json = serde_json::to_string(&MediaType::Movie).unwrap();
        assert_eq!(json, "\"movie\"");

        let parsed: MediaType = serde_json::from_str("\"tv\"").unwrap();
        assert_eq!(parsed, MediaType::Tv);
    }

    #[test]
    fn test_display_with_year() {
        let r = result(None);
        assert_eq!(r.to_string(), "The Batman (2022) [Movie]");
    }

    #[test]
    fn test_display_without_year() {
        let mut r = result(None);
        r.year = None;
        r.media_type = MediaType::Tv;
        assert_eq!(r.to_string(), "The Batman [TV Show]");
    }

    #[test]
    fn test_excerpt_short_text_untouched() {
        let r = result(Some("A short overview."));
        assert_eq!(r.excerpt(), "A short overview.");
    }

    #[test]
    fn test_excerpt_missing_overview() {
        let r = result(None);
        assert_eq!(r.excerpt(), "");
    }

    #[test]
    fn test_excerpt_truncates_at_240() {
        let long = "x".repeat(300);
        let r = result(Some(&long));
        let excerpt = r.excerpt();
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_LEN + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_excerpt_exactly_240_no_ellipsis() {
        let exact = "y".repeat(EXCERPT_MAX_LEN);
        let r = result(Some(&exact));
        assert_eq!(r.excerpt(), exact);
    }

    #[test]
    fn test_excerpt_multibyte_boundary() {
        let long = "é".repeat(250);
        let r = result(Some(&long));
        let excerpt = r.excerpt();
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_LEN + 3);
    }

    #[test]
    fn test_rating_prefers_vote_average() {
        let r = result(None);
        assert_eq!(r.rating(), "7.8");
    }

    #[test]
    fn test_rating_falls_back_to_popularity() {
        let mut r = result(None);
        r.vote_average = None;
        assert_eq!(r.rating(), "123");

        // Unrated items report 0.0, which also falls through
        r.vote_average = Some(0.0);
        assert_eq!(r.rating(), "123");
    }

    #[test]
    fn test_rating_na_when_neither_present() {
        let mut r = result(None);
        r.vote_average = None;
        r.popularity = None;
        assert_eq!(r.rating(), "N/A");

        r.popularity = Some(0.0);
        assert_eq!(r.rating(), "N/A");
    }

    #[test]
    fn test_poster_url_joins_base() {
        let mut r = result(None);
        r.poster_path = Some("/74xTEgt7R36Fpooo50r9T25onhq.jpg".to_string());
        assert_eq!(
            r.poster_url().unwrap(),
            "https://image.tmdb.org/t/p/w300/74xTEgt7R36Fpooo50r9T25onhq.jpg"
        );
    }

    #[test]
    fn test_poster_url_none_when_absent() {
        let r = result(None);
        assert!(r.poster_url().is_none());
    }
}
