use crate::helpers::{test_secrets, TestApp, PHONE_NUMBER};

#[tokio::test]
async fn should_dial_requested_number() {
    let app = TestApp::new().await;

    let response = app.post_voice(&[("To", "+15550001111"), ("From", "client:alice")]).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/xml");

    let twiml = response.text().await.unwrap();
    assert!(twiml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(twiml.contains(&format!(
        r#"<Dial callerId="{PHONE_NUMBER}">+15550001111</Dial>"#
    )));
}

#[tokio::test]
async fn should_dial_fallback_number_without_destination() {
    let app = TestApp::new().await;

    let twiml = app.post_voice(&[]).await.text().await.unwrap();

    assert!(twiml.contains("+12362392121</Dial>"));
}

#[tokio::test]
async fn should_use_fallback_caller_id_without_phone_number() {
    let mut secrets = test_secrets();
    secrets.twilio_phone_number = None;
    let app = TestApp::with_secrets(secrets).await;

    let twiml = app.post_voice(&[("To", "+15550001111")]).await.text().await.unwrap();

    assert!(twiml.contains(r#"callerId="+12362392121""#));
}

#[tokio::test]
async fn should_escape_destination() {
    let app = TestApp::new().await;

    let twiml = app
        .post_voice(&[("To", "<Hangup/>")])
        .await
        .text()
        .await
        .unwrap();

    assert!(twiml.contains("&lt;Hangup/&gt;</Dial>"));
    assert!(!twiml.contains("<Hangup/>"));
}

#[tokio::test]
async fn should_say_call_failed_on_unreadable_body() {
    let app = TestApp::new().await;
    let body = format!("To={}", "1".repeat(3 * 1024 * 1024));

    let response = app
        .http_client
        .post(&format!("{}/voice", &app.address))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .expect("Failed to execute voice request.");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/xml");

    let twiml = response.text().await.unwrap();
    assert!(twiml.contains("<Say>Sorry, call failed.</Say>"));
    assert!(!twiml.contains("<Dial"));
}

#[tokio::test]
async fn should_not_serve_voice_on_get() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(&format!("{}/voice", &app.address))
        .send()
        .await
        .expect("Failed to execute voice request.");

    assert_eq!(response.status().as_u16(), 405);
}
