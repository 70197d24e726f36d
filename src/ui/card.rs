//! Result card rendering
//!
//! Each search result becomes a fixed-height card: a title row with the
//! poster marker and rating, an excerpt row, and a spacer. Fixed height keeps
//! the scroll arithmetic trivial for the focus navigator.

use ratatui::text::{Line, Span};

use crate::models::SearchResult;
use crate::ui::Theme;

/// Rows one card occupies in the result list
pub const CARD_ROWS: usize = 3;

/// Marker shown on a card whose poster exists
pub const POSTER_MARK: &str = "▣";
/// Placeholder marker for a card without any image
pub const POSTER_PLACEHOLDER: &str = "▒";

/// Rendered projection of one search result
pub struct Card<'a> {
    item: &'a SearchResult,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new(item: &'a SearchResult, focused: bool) -> Self {
        Self { item, focused }
    }

    /// The card's lines, exactly [`CARD_ROWS`] of them
    pub fn lines(&self) -> Vec<Line<'static>> {
        let marker = if self.focused { "▸ " } else { "  " };
        let marker_style = if self.focused {
            Theme::focused()
        } else {
            Theme::dimmed()
        };

        let poster_span = if self.item.poster_url().is_some() {
            Span::styled(format!("{} ", POSTER_MARK), Theme::dimmed())
        } else {
            Span::styled(format!("{} ", POSTER_PLACEHOLDER), Theme::placeholder())
        };

        let title_style = if self.focused {
            Theme::focused()
        } else {
            Theme::text()
        };

        let year_str = self
            .item
            .year
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();

        let rating = self.item.rating();
        let rating_style = match self.item.vote_average {
            Some(v) if v >= 7.0 => Theme::rating_high(),
            Some(v) if v >= 5.0 => Theme::rating_mid(),
            _ => Theme::rating_low(),
        };

        let title_row = Line::from(vec![
            Span::styled(marker.to_string(), marker_style),
            poster_span,
            Span::styled(self.item.title.clone(), title_style),
            Span::styled(year_str, Theme::dimmed()),
            Span::raw(" "),
            Span::styled(format!("★ {}", rating), rating_style),
        ]);

        let excerpt_row = Line::from(vec![
            Span::raw("    "),
            Span::styled(self.item.excerpt(), Theme::dimmed()),
        ]);

        vec![title_row, excerpt_row, Line::from("")]
    }
}

/// The single placeholder line shown for an empty result set
pub fn no_results_line() -> Line<'static> {
    Line::from(Span::styled("No results", Theme::dimmed()))
}
