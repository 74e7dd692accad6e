use std::sync::Arc;

use anyhow::Result;
use media_tracker_core::AppConfig;
use media_tracker_http::{AppState, create_router};

use crate::{collections, search_service};

pub(crate) async fn run(config: &AppConfig) -> Result<()> {
    tracing::info!(?config, "starting media-tracker");
    let collections = collections(config).await?;
    collections.setup().await?;

    let state = Arc::new(AppState {
        collections: Arc::new(collections),
        search: Arc::new(search_service(config)?),
    });

    let router = create_router(state);
    let addr = config.bind_addr();
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
