use crate::{batch::BatchCoordinator, meta::PageResult};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// `{"urls": [...]}`, or `{"url": ...}` for a single page.
///
/// `urls` takes precedence when both are present.
#[derive(Deserialize)]
struct MetaRequest {
    url: Option<String>,
    urls: Option<Vec<String>>,
}

impl MetaRequest {
    fn into_urls(self) -> Vec<String> {
        match (self.urls, self.url) {
            (Some(urls), _) => urls,
            (None, Some(url)) => vec![url],
            (None, None) => vec![],
        }
    }
}

pub(crate) fn router(coordinator: BatchCoordinator) -> Router {
    Router::new()
        .route("/api/meta", post(meta_handler))
        .with_state(Arc::new(coordinator))
}

async fn meta_handler(State(coordinator): State<Arc<BatchCoordinator>>, body: Bytes) -> Response {
    let request: MetaRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(error) => {
            log::warn!("Rejecting malformed request: {error}");
            return (StatusCode::BAD_REQUEST, error.to_string()).into_response();
        }
    };

    let results: Vec<PageResult> = coordinator.process(request.into_urls()).await;
    Json(results).into_response()
}
