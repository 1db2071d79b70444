use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::client::UpstreamClient;
use crate::query::QueryBuilder;
use crate::render::PageRenderer;

pub mod handlers;
pub mod models;

pub struct AppState {
    pub query_builder: QueryBuilder,
    pub client: UpstreamClient,
    pub renderer: PageRenderer,
}

fn search_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/:query", get(handlers::search_handler))
        .route("/:query/:type", get(handlers::search_handler))
        .route("/:query/:type/:max", get(handlers::search_handler))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/search", search_routes())
        // legacy prefix
        .nest("/yt", search_routes())
        .with_state(state)
        .layer(middleware::from_fn(handlers::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
