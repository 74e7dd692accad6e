//! HTTP API server for media-tracker.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod service_api;
mod viewer;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use media_tracker_service::{CollectionService, SearchService};
use tower_http::cors::{Any, CorsLayer};

pub use response_types::VersionResponse;
pub use service_api::ServiceMediaApi;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Saved lists (favorites, watchlist)
    pub collections: Arc<CollectionService>,
    /// Title search against the lookup source
    pub search: Arc<SearchService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/view/{kind}", post(viewer::add_result))
        .route("/view/{kind}/{id}", post(viewer::save_entry))
        .route("/view/{kind}/{id}/delete", post(viewer::remove_entry))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/search", get(handlers::search::search))
        .route("/api/test-db", get(handlers::admin::test_db))
        .route("/api/setup-db", post(handlers::admin::setup_db))
        .route(
            "/api/{kind}",
            get(handlers::collections::list).post(handlers::collections::create),
        )
        .route(
            "/api/{kind}/{id}",
            put(handlers::collections::update).delete(handlers::collections::delete),
        )
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
