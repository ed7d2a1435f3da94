//! Route table.

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/readme", post(handlers::create_readme))
        .route("/readme/{id}", get(handlers::get_readme))
        .route("/readme/{id}/markdown", get(handlers::get_markdown))
        .route("/readme/{id}/header", put(handlers::add_header))
        .route("/readme/{id}/paragraph", put(handlers::add_paragraph))
        .route("/readme/{id}/code", put(handlers::add_code))
        .route("/readme/{id}/blockquote", put(handlers::add_blockquote))
        .route("/readme/{id}/link", put(handlers::add_link))
        .route("/readme/{id}/image", put(handlers::add_image))
        .route("/readme/{id}/table", put(handlers::add_table))
        .route("/readme/{id}/file", post(handlers::export_readme))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
