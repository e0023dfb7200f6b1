use axum::extract::rejection::JsonRejection;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::types::content::OkMessage;

#[derive(Debug, ThisError)]
pub enum TaaltorenError {
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(&'static str),

    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedDatabase(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Request payload error: {0}")]
    Payload(#[from] JsonRejection),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaaltorenError {
    /// Stable label used in logs; never sent to clients.
    pub fn kind(&self) -> &'static str {
        match self {
            TaaltorenError::Config(_) => "config",
            TaaltorenError::UrlParse(_) => "url_parse",
            TaaltorenError::InvalidDatabaseUrl(_) => "invalid_database_url",
            TaaltorenError::UnsupportedDatabase(_) => "unsupported_database",
            TaaltorenError::DatabaseError(_) => "database",
            TaaltorenError::Payload(_) => "payload",
            TaaltorenError::Io(_) => "io",
        }
    }
}

impl IntoResponse for TaaltorenError {
    fn into_response(self) -> axum::response::Response {
        // Clients get one generic fault; bad input and server faults look the same.
        tracing::error!(kind = self.kind(), error = %self, "request failed");
        let body = ApiErrorBody {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal server error occurred.".to_string(),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse { error: body }),
        )
            .into_response()
    }
}

/// Fault on the content routes. Same cause as [`TaaltorenError`], rendered
/// in that service's envelope: 500 `{"ok":false,"msg":"DB error"}`.
#[derive(Debug)]
pub struct ContentFault(pub TaaltorenError);

impl From<TaaltorenError> for ContentFault {
    fn from(e: TaaltorenError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ContentFault {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(kind = self.0.kind(), error = %self.0, "content request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(OkMessage::failed("DB error")),
        )
            .into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
