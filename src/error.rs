use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub const TRANSPORT_ERROR_BODY: &str = "Sorry, error.";
pub const DECODE_ERROR_BODY: &str = "Sorry, could not decode the search response.";
pub const RENDER_ERROR_BODY: &str = "Sorry, could not render the results page.";

/// Everything that can go wrong while serving a single search request.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("request to search API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search API returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("could not decode search API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not render results page: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for SearchError {
    /// Upstream failures are reported in a plain-text body with status 200.
    /// Only a broken template is a server error.
    fn into_response(self) -> Response {
        log::error!("search failed: {:#}", self);
        match &self {
            SearchError::Transport(_) => (StatusCode::OK, TRANSPORT_ERROR_BODY.to_string()),
            SearchError::Upstream { message, .. } => {
                (StatusCode::OK, format!("Upstream search failed: {message}"))
            }
            SearchError::Decode(_) => (StatusCode::OK, DECODE_ERROR_BODY.to_string()),
            SearchError::Render(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                RENDER_ERROR_BODY.to_string(),
            ),
        }
        .into_response()
    }
}
