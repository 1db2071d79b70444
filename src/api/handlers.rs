use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;

use crate::error::SearchError;
use crate::query::SearchRequest;
use crate::render::NO_RESULTS_BODY;

use super::AppState;
use super::models::SearchPath;

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Path(path): Path<SearchPath>,
) -> Result<Response, SearchError> {
    let request = SearchRequest::from(path);
    log::info!(
        "handled params [q: {}, type: {}, maxResults: {}]",
        request.query,
        request.result_type,
        request.max_results
    );

    let url = state.query_builder.build(&request);
    let response = state.client.search(url).await?;

    if response.total_results == 0 {
        log::info!("{NO_RESULTS_BODY}");
        return Ok(NO_RESULTS_BODY.into_response());
    }

    let page = state.renderer.render_page(&response)?;
    Ok(Html(page).into_response())
}

/// Tags each request with a short id and logs it on the way in and out.
pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = nanoid::nanoid!(8);
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();
    log::info!("[{request_id}] {method} {uri}");

    let response = next.run(request).await;

    log::info!(
        "[{request_id}] {} in {}ms",
        response.status(),
        start.elapsed().as_millis()
    );
    response
}
