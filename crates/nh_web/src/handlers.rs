use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nh_core::Article;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{upstream_label, ApiError};
use crate::logging::Logger;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HeadlinesResponse {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub articles: Vec<Article>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StructureRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureResponse {
    pub structured_content: String,
}

/// Fetches and normalizes today's headlines.
///
/// Parse failures never surface here. Fetch failures come back with their
/// status and the provider's fallback set so the client still has cards.
pub async fn load_headlines(state: &AppState) -> (StatusCode, HeadlinesResponse) {
    let log = Logger::new().with_prefix("fetch-trending-news");

    match state.fetcher.fetch().await {
        Ok(raw) => {
            let articles = state.normalizer.normalize(&raw.body);
            log.info(&format!("Serving {} articles from {}", articles.len(), state.fetcher.kind()));
            (StatusCode::OK, HeadlinesResponse { error: None, articles })
        }
        Err(e) => {
            log.error(&format!("Error fetching headlines: {}", e));
            let api = ApiError::from_upstream(&e, upstream_label(state.fetcher.kind()));
            (
                api.status,
                HeadlinesResponse {
                    error: Some(api.message),
                    articles: state.normalizer.fallback(),
                },
            )
        }
    }
}

/// Runs the structuring pass. There is no fallback content for this path.
pub async fn structure(state: &AppState, request: StructureRequest) -> Result<StructureResponse, ApiError> {
    let log = Logger::new().with_prefix("structure-article");

    let content = [request.content, request.description]
        .into_iter()
        .flatten()
        .find(|text| !text.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Article content is required"))?;
    let title = request.title.unwrap_or_default();

    match state.structurer.structure(&title, &content).await {
        Ok(structured) => {
            log.debug(&format!("Structured {:?}", title));
            Ok(StructureResponse {
                structured_content: structured.into_inner(),
            })
        }
        Err(e) => {
            log.error(&format!("Error structuring article {:?}: {}", title, e));
            Err(ApiError::from_upstream(&e, "AI gateway"))
        }
    }
}

pub async fn fetch_trending_news(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (status, body) = load_headlines(&state).await;
    (status, Json(body))
}

pub async fn structure_article(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StructureRequest>, JsonRejection>,
) -> Result<Json<StructureResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    structure(&state, request).await.map(Json)
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "provider": state.fetcher.kind(),
    }))
}
