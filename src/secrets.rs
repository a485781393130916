use std::env::var;
use thiserror::Error;

pub const ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const API_KEY: &str = "TWILIO_API_KEY";
pub const API_SECRET: &str = "TWILIO_API_SECRET";
pub const TWIML_APP_SID: &str = "TWILIO_TWIML_APP_SID";
pub const PHONE_NUMBER: &str = "TWILIO_PHONE_NUMBER";

#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub twilio_account_sid: Option<String>,
    pub twilio_api_key: Option<String>,
    pub twilio_api_secret: Option<String>,
    pub twilio_app_sid: Option<String>,
    pub twilio_phone_number: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub account_sid: &'a str,
    pub api_key: &'a str,
    pub api_secret: &'a str,
    pub app_sid: &'a str,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing environment variables: {}", .missing.join(", "))]
pub struct ConfigError {
    pub missing: Vec<&'static str>,
}

impl Secrets {
    pub fn from_env() -> Self {
        Self {
            twilio_account_sid: non_empty_var(ACCOUNT_SID),
            twilio_api_key: non_empty_var(API_KEY),
            twilio_api_secret: non_empty_var(API_SECRET),
            twilio_app_sid: non_empty_var(TWIML_APP_SID),
            twilio_phone_number: non_empty_var(PHONE_NUMBER),
        }
    }

    /// Borrow the required secrets, or name every one that is missing.
    pub fn credentials(&self) -> Result<Credentials<'_>, ConfigError> {
        match (
            self.twilio_account_sid.as_deref(),
            self.twilio_api_key.as_deref(),
            self.twilio_api_secret.as_deref(),
            self.twilio_app_sid.as_deref(),
        ) {
            (Some(account_sid), Some(api_key), Some(api_secret), Some(app_sid)) => {
                Ok(Credentials {
                    account_sid,
                    api_key,
                    api_secret,
                    app_sid,
                })
            }
            _ => Err(ConfigError {
                missing: self
                    .presence()
                    .into_iter()
                    .filter_map(|(name, present)| (!present).then_some(name))
                    .collect(),
            }),
        }
    }

    pub fn presence(&self) -> [(&'static str, bool); 4] {
        [
            (ACCOUNT_SID, self.twilio_account_sid.is_some()),
            (API_KEY, self.twilio_api_key.is_some()),
            (API_SECRET, self.twilio_api_secret.is_some()),
            (TWIML_APP_SID, self.twilio_app_sid.is_some()),
        ]
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    var(name).ok().filter(|value| !value.trim().is_empty())
}
