//! API clients for external services
//!
//! - TMDB: movie/TV metadata multi-search

pub mod tmdb;

pub use tmdb::{SearchError, TmdbClient, RESULT_CAP};
