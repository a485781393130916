use crate::{
    error::ApiError,
    jwt,
    secrets::{Credentials, Secrets},
    CONFIG,
};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query},
    Extension, Json,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, PartialEq)]
pub struct Grants {
    pub identity: String,
    pub voice: VoiceGrant,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct VoiceGrant {
    pub incoming: IncomingVoiceGrant,
    pub outgoing: OutgoingVoiceGrant,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct IncomingVoiceGrant {
    pub allow: bool,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct OutgoingVoiceGrant {
    pub application_sid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<OutgoingParams>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct OutgoingParams {
    #[serde(rename = "To")]
    pub to: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Claims<G = Grants> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub grants: G,
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenRequest {
    pub identity: Option<String>,
    #[serde(alias = "To")]
    pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub identity: String,
}

impl TokenRequest {
    fn or(self, other: TokenRequest) -> TokenRequest {
        TokenRequest {
            identity: self.identity.or(other.identity),
            to: self.to.or(other.to),
        }
    }
}

impl Claims {
    pub fn voice(
        credentials: &Credentials<'_>,
        identity: &str,
        to: Option<&str>,
        now: i64,
        ttl: Duration,
    ) -> Claims {
        let grants = Grants {
            identity: identity.to_string(),
            voice: VoiceGrant {
                incoming: IncomingVoiceGrant { allow: true },
                outgoing: OutgoingVoiceGrant {
                    application_sid: credentials.app_sid.to_string(),
                    params: to.map(|to| OutgoingParams { to: to.to_string() }),
                },
            },
        };

        Claims {
            jti: Some(format!("{}-{}", credentials.api_key, now)),
            iss: credentials.api_key.to_string(),
            sub: credentials.account_sid.to_string(),
            iat: now,
            exp: now + ttl.num_seconds(),
            grants,
        }
    }
}

pub async fn get_token(
    secrets: Extension<Secrets>,
    query: Option<Query<TokenRequest>>,
) -> Result<Json<TokenResponse>, ApiError> {
    let request = query.map(|Query(q)| q).unwrap_or_default();
    issue_token(&secrets, request)
}

// Body over query string; unreadable or malformed bodies are ignored
pub async fn post_token(
    secrets: Extension<Secrets>,
    query: Option<Query<TokenRequest>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let from_body = match body {
        Ok(body) if body.is_empty() => TokenRequest::default(),
        Ok(body) => serde_json::from_slice(&body).unwrap_or_else(|e| {
            log::debug!("Ignoring malformed token request body: {e}");
            TokenRequest::default()
        }),
        Err(e) => {
            log::debug!("Ignoring unreadable token request body: {e}");
            TokenRequest::default()
        }
    };

    let request = from_body.or(query.map(|Query(q)| q).unwrap_or_default());
    issue_token(&secrets, request)
}

fn issue_token(secrets: &Secrets, request: TokenRequest) -> Result<Json<TokenResponse>, ApiError> {
    let credentials = secrets.credentials().map_err(|e| {
        log::error!("Refusing to issue token: {e}");
        e
    })?;

    let identity = non_blank(request.identity)
        .unwrap_or_else(|| CONFIG.settings.default_identity.to_string());
    let to = non_blank(request.to);

    let claims = Claims::voice(
        &credentials,
        &identity,
        to.as_deref(),
        Utc::now().timestamp(),
        Duration::seconds(CONFIG.settings.token_expiry),
    );

    let token = jwt::sign(&claims, credentials.api_secret.as_bytes()).map_err(|e| {
        log::error!("Error encoding Twilio token: {e:?}");
        e
    })?;

    log::debug!("Issued token for {identity}");

    Ok(Json(TokenResponse { token, identity }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
