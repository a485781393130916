use crate::{
    secrets::Secrets,
    twiml::{Dial, Say, Twiml},
    CONFIG,
};
use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::header,
    response::IntoResponse,
    Extension,
};

pub async fn voice_handler(
    secrets: Extension<Secrets>,
    body: Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    let twiml = match body {
        Ok(body) => {
            let to = destination(&body);
            log::debug!("Dialing {to}");
            generate_dial_twiml(&to, secrets.twilio_phone_number.as_deref())
        }
        Err(e) => {
            log::error!("Failed to read voice webhook body: {e}");
            generate_failed_twiml()
        }
    };

    ([(header::CONTENT_TYPE, "text/xml")], twiml.as_twiml())
}

fn destination(body: &[u8]) -> String {
    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == "To")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| CONFIG.settings.fallback_number.to_string())
}

fn generate_dial_twiml(to: &str, caller_id: Option<&str>) -> Twiml {
    let mut twiml = Twiml::new();

    twiml.add(&Dial {
        number: to.to_owned(),
        caller_id: Some(
            caller_id
                .unwrap_or(CONFIG.settings.fallback_number)
                .to_owned(),
        ),
    });

    twiml
}

fn generate_failed_twiml() -> Twiml {
    let mut twiml = Twiml::new();

    twiml.add(&Say {
        txt: CONFIG.texts.call_failed.to_owned(),
    });

    twiml
}
