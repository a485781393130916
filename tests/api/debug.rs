use crate::helpers::{test_secrets, TestApp, ACCOUNT_SID, API_SECRET};
use serde_json::Value;

#[tokio::test]
async fn should_report_all_present() {
    let app = TestApp::new().await;

    let response = app.get_debug().await;
    assert_eq!(response.status().as_u16(), 200);

    let text = response.text().await.unwrap();
    assert!(!text.contains(API_SECRET));
    assert!(!text.contains(ACCOUNT_SID));

    let body: Value = serde_json::from_str(&text).unwrap();
    assert!(body["timestamp"].is_string());
    for name in [
        "TWILIO_ACCOUNT_SID",
        "TWILIO_API_KEY",
        "TWILIO_API_SECRET",
        "TWILIO_TWIML_APP_SID",
    ] {
        assert_eq!(body["env_check"][name], "Present");
    }
}

#[tokio::test]
async fn should_report_missing_values() {
    let mut secrets = test_secrets();
    secrets.twilio_api_secret = None;
    let app = TestApp::with_secrets(secrets).await;

    let body: Value = app.get_debug().await.json().await.unwrap();

    assert_eq!(body["env_check"]["TWILIO_API_SECRET"], "MISSING");
    assert_eq!(body["env_check"]["TWILIO_API_KEY"], "Present");
}
