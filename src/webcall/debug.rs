use crate::secrets::Secrets;
use axum::{Extension, Json};
use chrono::Utc;
use serde_json::{json, Map, Value};

/// Report which required secrets are configured, without their values.
pub async fn debug_handler(secrets: Extension<Secrets>) -> Json<Value> {
    let env_check: Map<String, Value> = secrets
        .presence()
        .into_iter()
        .map(|(name, present)| {
            let status = if present { "Present" } else { "MISSING" };
            (name.to_string(), Value::from(status))
        })
        .collect();

    Json(json!({
        "timestamp": Utc::now().to_rfc3339(),
        "env_check": env_check,
    }))
}
