use std::{path::Path, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    handler::Handler,
    response::{Html, IntoResponse, Response},
    Router,
};
use tower_http::services::ServeDir;

use crate::{errors::internal_server_error, RestServerConfig};

pub const ENTRY_DOCUMENT: &str = "index.html";

/// Serves files of the client bundle. Every request that does not name a file
/// of the bundle gets the entry document, whatever its method, so the client
/// can route it.
pub fn router(config: &RestServerConfig) -> Router<()> {
    let entry_document: Arc<Path> = config.static_dir.join(ENTRY_DOCUMENT).into();

    let bundle = ServeDir::new(&config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(entry_document_handler.with_state(entry_document));

    Router::new().fallback_service(bundle)
}

async fn entry_document_handler(State(path): State<Arc<Path>>) -> Response {
    match tokio::fs::read_to_string(&*path)
        .await
        .with_context(|| format!("Failed to read entry document at {}", path.display()))
    {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_server_error(err),
    }
}
