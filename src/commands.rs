//! CLI command handlers
//!
//! Each handler takes its parsed args and the [`Output`] helper and returns
//! a semantic [`ExitCode`].

use serde::Serialize;

use crate::api::{SearchError, TmdbClient};
use crate::cli::{ExitCode, MediaTypeFilter, Output, SearchCmd, UrlCmd};
use crate::config::Config;
use crate::models::{MediaType, SearchResult};

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, output: &Output) -> ExitCode {
    if cmd.query.trim().is_empty() {
        return output.error("Query must not be blank", ExitCode::InvalidArgs);
    }

    let config = Config::load();
    let Some(api_key) = config.api_key() else {
        return output.error(SearchError::MissingCredential.to_string(), ExitCode::NoCredential);
    };
    let client = TmdbClient::new(api_key);

    output.info(format!("Searching for: {}", cmd.query.trim()));

    match client.search(cmd.query.trim()).await {
        Ok(mut results) => {
            if let Some(filter) = cmd.media_type {
                results.retain(|r| match filter {
                    MediaTypeFilter::Movie => r.media_type == MediaType::Movie,
                    MediaTypeFilter::Tv => r.media_type == MediaType::Tv,
                });
            }
            results.truncate(cmd.limit);

            if output.json {
                if let Err(e) = output.print(&results) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                for r in &results {
                    output.line(format_result_line(r));
                }
                if results.is_empty() {
                    output.line("No results");
                }
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Search failed: {}", e), ExitCode::NetworkError),
    }
}

fn format_result_line(r: &SearchResult) -> String {
    format!("{:>9}  {}  ★ {}", r.id, r, r.rating())
}

// =============================================================================
// Url Command
// =============================================================================

#[derive(Debug, Serialize)]
struct UrlResponse {
    id: u64,
    url: String,
}

pub fn url_cmd(cmd: UrlCmd, output: &Output) -> ExitCode {
    let config = Config::load();
    if let Err(e) = config.validate() {
        return output.error(e.to_string(), ExitCode::InvalidArgs);
    }

    let url = config.detail_url(cmd.id);
    if output.json {
        if let Err(e) = output.print(UrlResponse { id: cmd.id, url }) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        output.line(url);
    }
    ExitCode::Success
}
