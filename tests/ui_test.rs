//! UI component tests
//!
//! Renders cards, placeholders and layout into a ratatui TestBackend and
//! asserts on the buffer contents. No live terminal required.

use ratatui::{
    backend::TestBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};

use kiosktui::models::{MediaType, SearchResult};
use kiosktui::ui::card::{no_results_line, Card, CARD_ROWS, POSTER_MARK, POSTER_PLACEHOLDER};
use kiosktui::ui::theme::{color_to_rgb, contrast_ratio, Theme};

// =============================================================================
// Helpers
// =============================================================================

fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer.content.iter().map(|c| c.symbol()).collect()
}

fn item(id: u64, title: &str, poster: Option<&str>) -> SearchResult {
    SearchResult {
        id,
        media_type: MediaType::Movie,
        title: title.to_string(),
        year: Some(2022),
        overview: Some("A long night in the city.".to_string()),
        poster_path: poster.map(String::from),
        vote_average: Some(7.8),
        popularity: None,
    }
}

/// Mirror of the app's main vertical layout
fn main_layout(frame: &mut Frame, area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_layout_minimum_size() {
    let mut terminal = test_terminal(80, 24);

    terminal
        .draw(|frame| {
            let area = frame.area();
            let (header, content, status) = main_layout(frame, area);

            assert_eq!(header.height, 3);
            assert_eq!(status.height, 1);
            assert!(content.height >= 20);
            assert_eq!(header.width, 80);
            assert_eq!(content.width, 80);
            assert_eq!(status.width, 80);
        })
        .unwrap();
}

#[test]
fn test_layout_large_size() {
    let mut terminal = test_terminal(200, 50);

    terminal
        .draw(|frame| {
            let area = frame.area();
            let (header, content, status) = main_layout(frame, area);

            assert_eq!(header.height, 3);
            assert_eq!(status.height, 1);
            assert_eq!(content.height, 46);
        })
        .unwrap();
}

// =============================================================================
// Card Rendering Tests
// =============================================================================

#[test]
fn test_cards_render_in_order() {
    let mut terminal = test_terminal(80, 24);

    let results = vec![
        item(1, "The Batman", Some("/p1.jpg")),
        item(2, "The Dark Knight", Some("/p2.jpg")),
    ];

    terminal
        .draw(|frame| {
            let area = frame.area();
            let lines: Vec<Line> = results
                .iter()
                .enumerate()
                .flat_map(|(i, r)| Card::new(r, i == 0).lines())
                .collect();
            frame.render_widget(Paragraph::new(lines), area);
        })
        .unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("The Batman"));
    assert!(content.contains("The Dark Knight"));
    assert!(content.contains("(2022)"));
    assert!(content.contains("★ 7.8"));
    assert!(content.contains("A long night in the city."));

    // Exactly one focused marker
    assert_eq!(content.matches('▸').count(), 1);
    let batman = content.find("The Batman").unwrap();
    let knight = content.find("The Dark Knight").unwrap();
    assert!(batman < knight, "cards must keep insertion order");
}

#[test]
fn test_missing_poster_renders_placeholder() {
    let mut terminal = test_terminal(80, 12);

    let results = vec![item(1, "No Poster Movie", None)];

    terminal
        .draw(|frame| {
            let lines: Vec<Line> = Card::new(&results[0], false).lines();
            frame.render_widget(Paragraph::new(lines), frame.area());
        })
        .unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains(POSTER_PLACEHOLDER));
    assert!(!content.contains(POSTER_MARK));
}

#[test]
fn test_excerpt_truncated_on_card() {
    let mut r = item(1, "Wordy", None);
    r.overview = Some("z".repeat(500));

    let lines = Card::new(&r, false).lines();
    let text: String = lines.iter().map(|l| l.to_string()).collect();
    assert!(text.contains(&"z".repeat(240)));
    assert!(text.contains("..."));
    assert!(!text.contains(&"z".repeat(241)));
}

#[test]
fn test_no_results_placeholder_is_single_line() {
    let mut terminal = test_terminal(40, 8);

    terminal
        .draw(|frame| {
            frame.render_widget(Paragraph::new(no_results_line()), frame.area());
        })
        .unwrap();

    let content = buffer_text(&terminal);
    assert_eq!(content.matches("No results").count(), 1);
}

#[test]
fn test_card_height_supports_scroll_math() {
    // A 24-row terminal with a 3-row header and 1-row status bar leaves 20
    // content rows; minus the border that is 18 rows, i.e. 6 whole cards.
    let inner_height = 18usize;
    assert_eq!(inner_height / CARD_ROWS, 6);

    let r = item(1, "Any", None);
    assert_eq!(Card::new(&r, true).lines().len(), CARD_ROWS);
}

// =============================================================================
// Theme Tests
// =============================================================================

#[test]
fn test_theme_text_contrast() {
    let bg = color_to_rgb(Theme::BACKGROUND).unwrap();
    let text = color_to_rgb(Theme::TEXT).unwrap();
    assert!(contrast_ratio(text, bg) >= 4.5);
}

#[test]
fn test_theme_accent_contrast() {
    let bg = color_to_rgb(Theme::BACKGROUND).unwrap();
    let accent = color_to_rgb(Theme::ACCENT).unwrap();
    assert!(contrast_ratio(accent, bg) >= 3.0);
}

#[test]
fn test_focused_style_uses_accent() {
    let style = Theme::focused();
    assert_eq!(style.fg, Some(Theme::ACCENT));
}
