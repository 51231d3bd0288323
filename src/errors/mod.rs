//! Unified error handling with consistent API response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error detail in the API response envelope.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Consistent JSON envelope for health and error responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            data: Some(data),
            error: None,
        })
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Unexpected upstream response: {0}")]
    UpstreamSchema(String),

    #[error("Game result for {user_id} has {guesses} guesses, expected {rounds}")]
    RoundOutOfRange {
        user_id: String,
        guesses: usize,
        rounds: usize,
    },

    #[error("Template error: {0}")]
    Render(#[from] tera::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "Upstream request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The leaderboard service could not be reached".to_string(),
                )
            }
            AppError::UpstreamStatus { status, url } => {
                tracing::error!(status, url = %url, "Upstream returned an error status");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    format!("The leaderboard service responded with {status}"),
                )
            }
            AppError::UpstreamSchema(msg) => {
                tracing::error!(error = %msg, "Upstream schema mismatch");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_SCHEMA_ERROR", msg.clone())
            }
            AppError::RoundOutOfRange { .. } | AppError::Render(_) => {
                tracing::error!(error = %self, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ApiResponse::<()> {
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_success() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["data"], "hello");
        assert!(json["error"].is_null());
    }

    #[tokio::test]
    async fn error_body_uses_envelope() {
        let response = AppError::UpstreamSchema("missing currentLeg".to_string()).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["error"]["code"], "UPSTREAM_SCHEMA_ERROR");
        assert_eq!(json["error"]["message"], "missing currentLeg");
    }

    #[test]
    fn round_out_of_range_display() {
        let err = AppError::RoundOutOfRange {
            user_id: "u1".to_string(),
            guesses: 3,
            rounds: 5,
        };
        assert_eq!(err.to_string(), "Game result for u1 has 3 guesses, expected 5");
    }

    #[test]
    fn status_codes_follow_taxonomy() {
        let validation = AppError::Validation("leagueId".to_string()).into_response();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let upstream = AppError::UpstreamStatus {
            status: 503,
            url: "http://upstream/leagues/x".to_string(),
        }
        .into_response();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);

        let schema = AppError::UpstreamSchema("bad".to_string()).into_response();
        assert_eq!(schema.status(), StatusCode::BAD_GATEWAY);
    }
}
