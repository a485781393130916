use crate::{jwt::SignError, secrets::ConfigError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing configuration")]
    Config(#[from] ConfigError),

    #[error("Failed to generate token")]
    Sign(#[from] SignError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Config(e) => json!({ "error": self.to_string(), "details": e.to_string() }),
            ApiError::Sign(e) => json!({ "error": self.to_string(), "message": e.to_string() }),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
