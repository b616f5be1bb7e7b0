use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod logging;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/fetch-trending-news",
            get(handlers::fetch_trending_news).post(handlers::fetch_trending_news),
        )
        .route("/api/headlines", get(handlers::fetch_trending_news))
        .route("/structure-article", post(handlers::structure_article))
        .route("/api/structure", post(handlers::structure_article))
        .route("/health", get(handlers::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = create_app(state);
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 NewsHub listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}

pub mod prelude {
    pub use nh_core::{Article, Error, Result};
    pub use crate::handlers::{load_headlines, structure, HeadlinesResponse, StructureRequest};
    pub use crate::{create_app, serve, AppState};
}
