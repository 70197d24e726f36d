//! kiosktui - TV-remote style terminal kiosk for searching movies & shows
//!
//! Search TMDB, pick a result with Up/Down/Enter navigation, jump to its
//! detail page.
//!
//! # Modules
//!
//! - `models` - Search result data and card projections
//! - `api` - TMDB search client
//! - `focus` - Focus navigator (cursor over the derived focusable set)
//! - `app` - Application state and key routing
//! - `config` - API credential and detail URL template
//! - `ui` - Theme and card rendering
//! - `cli` / `commands` - Scriptable command-line surface

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod focus;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::{SearchError, TmdbClient, RESULT_CAP};
pub use app::{App, Effect, InputMode, SearchJob, View};
pub use config::Config;
pub use focus::{focusables, Focusable, FocusCursor};
pub use models::{MediaType, SearchResult};
