//! Terminal UI components
//!
//! Built with ratatui; remote-control style keyboard navigation throughout.

pub mod card;
pub mod theme;

pub use theme::Theme;
