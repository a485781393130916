use axum::{
    routing::{get, post},
    Router,
};

mod debug;
mod token;
mod voice;

pub use token::{Claims, Grants, TokenRequest, TokenResponse};

pub fn router() -> Router {
    Router::new()
        .route("/", get(token::get_token).post(token::post_token))
        .route("/voice", post(voice::voice_handler))
        .route("/debug", get(debug::debug_handler))
}
