//! Color palette and style helpers for the kiosk UI
//!
//! Deep navy background with an amber focus accent, tuned for reading from
//! couch distance. The focused element is the only one carrying the accent
//! border and marker.

use ratatui::style::{Color, Modifier, Style};

/// Kiosk palette
pub struct Theme;

impl Theme {
    /// Background: deep navy
    pub const BACKGROUND: Color = Color::Rgb(0x0b, 0x10, 0x20);

    /// Panel background (cards, status bar)
    pub const PANEL: Color = Color::Rgb(0x12, 0x18, 0x30);

    /// Poster placeholder background (no image available)
    pub const PLACEHOLDER: Color = Color::Rgb(0x04, 0x11, 0x22);

    /// Primary accent: amber, used for focus
    pub const ACCENT: Color = Color::Rgb(0xff, 0xb4, 0x54);

    /// Text: soft white
    pub const TEXT: Color = Color::Rgb(0xd8, 0xde, 0xe9);

    /// Muted text
    pub const DIM: Color = Color::Rgb(0x6c, 0x75, 0x89);

    /// Border color (muted blue)
    pub const BORDER: Color = Color::Rgb(0x2e, 0x3a, 0x62);

    /// Error: warm red
    pub const ERROR: Color = Color::Rgb(0xff, 0x52, 0x77);

    /// High rating tier
    pub const GOOD: Color = Color::Rgb(0x7d, 0xd9, 0x7b);

    /// Middling rating tier
    pub const OKAY: Color = Color::Rgb(0xff, 0xb4, 0x54);

    // -------------------------------------------------------------------------
    // Style Helpers
    // -------------------------------------------------------------------------

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of the focused element itself
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Poster placeholder glyph style
    pub fn placeholder() -> Style {
        Style::default().fg(Self::DIM).bg(Self::PLACEHOLDER)
    }

    pub fn rating_high() -> Style {
        Style::default().fg(Self::GOOD)
    }

    pub fn rating_mid() -> Style {
        Style::default().fg(Self::OKAY)
    }

    pub fn rating_low() -> Style {
        Style::default().fg(Self::DIM)
    }
}

// =============================================================================
// Color Utilities
// =============================================================================

/// Relative luminance, per the WCAG definition
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, 1:1 .. 21:1
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// RGB tuple from a ratatui Color (Rgb variant only)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
