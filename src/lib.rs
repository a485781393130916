use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use secrets::Secrets;
use static_toml::static_toml;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

static_toml! { pub static CONFIG = include_toml!("Config.toml"); }

pub mod error;
pub mod jwt;
pub mod secrets;
pub mod twiml;
pub mod webcall;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

pub fn app(secrets: Secrets) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(false);

    Router::new()
        .route("/health_check", get(health_check))
        .merge(webcall::router())
        .fallback(error_handler)
        // Answers every OPTIONS request itself
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(Extension(secrets))
}

pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn error_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}
