use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use thiserror::Error;

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

#[derive(Debug, Error)]
pub enum SignError {
    #[error("signing secret is empty")]
    EmptySecret,

    #[error("failed to serialize claims: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid signing key: {0}")]
    Key(String),
}

/// Sign `claims` as a compact HS256 JWT keyed with the raw bytes of `secret`.
pub fn sign<T: Serialize>(claims: &T, secret: &[u8]) -> Result<String, SignError> {
    if secret.is_empty() {
        return Err(SignError::EmptySecret);
    }

    let payload = serde_json::to_vec(claims)?;
    let signing_input = format!("{}.{}", encode(HEADER), encode(payload));

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).map_err(|e| SignError::Key(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    let signature = mac.finalize().into_bytes();

    Ok(format!("{signing_input}.{}", encode(signature)))
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}
