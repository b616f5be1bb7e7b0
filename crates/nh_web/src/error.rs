use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nh_core::{Error, ProviderKind};
use serde_json::json;

/// Error as seen by the browser client: a status and a short message.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Maps a core error for a call against `upstream`. Generic upstream
    /// failures are reported without their body; the body is only logged.
    pub fn from_upstream(err: &Error, upstream: &str) -> Self {
        let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = match err {
            Error::Config(_) | Error::RateLimited | Error::PaymentRequired => err.to_string(),
            Error::Parse(message) => message.clone(),
            Error::Upstream { .. } | Error::Http(_) | Error::Serialization(_) => format!("{} error", upstream),
        };
        Self { status, message }
    }
}

/// Human name of the upstream behind a provider kind.
pub fn upstream_label(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::AiGateway => "AI gateway",
        ProviderKind::SearchApi => "Search API",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from_upstream(&Error::RateLimited, "AI gateway");
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.message, "Rate limits exceeded. Please try again later.");

        let err = ApiError::from_upstream(&Error::PaymentRequired, "AI gateway");
        assert_eq!(err.status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(err.message, "Payment required. Please add credits to continue.");

        let err = ApiError::from_upstream(&Error::Config("AI_GATEWAY_API_KEY is not configured".to_string()), "AI gateway");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "AI_GATEWAY_API_KEY is not configured");
    }

    #[test]
    fn test_upstream_body_not_leaked() {
        let err = Error::Upstream { status: 503, body: "internal stack trace".to_string() };
        let api = ApiError::from_upstream(&err, upstream_label(ProviderKind::SearchApi));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Search API error");
    }
}
