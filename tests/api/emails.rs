use crate::helpers::{json_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn sign_up_returns_201_for_valid_emails() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app
        .post_email(&json!({ "email": "renter@example.com", "city": "Austin" }))
        .await;

    // then
    assert_eq!(response.status(), 201);
    let signup = json_body(response).await["email"].clone();
    assert_eq!(signup["email"], "renter@example.com");
    assert_eq!(signup["city"], "Austin");
    assert!(signup["subscribed_at"].is_string());
}

#[tokio::test]
async fn signing_up_twice_keeps_the_first_signup() {
    // given
    let app = TestApp::spawn().await;
    let first = json_body(
        app.post_email(&json!({ "email": "renter@example.com", "city": "Austin" }))
            .await,
    )
    .await;

    // when
    let response = app
        .post_email(&json!({ "email": "renter@example.com", "city": "Denver" }))
        .await;

    // then
    assert_eq!(response.status(), 201);
    assert_eq!(json_body(response).await, first);

    let signups = json_body(app.get_emails().await).await;
    let signups = signups["emails"].as_array().unwrap();
    assert_eq!(signups.len(), 1);
    assert_eq!(signups[0], first["email"]);
}

#[tokio::test]
async fn sign_up_without_a_city_stores_no_city() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_email(&json!({ "email": "renter@example.com" })).await;

    // then
    assert_eq!(response.status(), 201);
    assert!(json_body(response).await["email"]["city"].is_null());
}

#[tokio::test]
async fn sign_up_returns_400_when_the_email_is_missing() {
    // given
    let app = TestApp::spawn().await;
    let test_cases = vec![
        (json!({}), "no email"),
        (json!({ "email": "" }), "an empty email"),
        (json!({ "email": "   ", "city": "Austin" }), "a blank email"),
    ];

    for (body, description) in test_cases {
        // when
        let response = app.post_email(&body).await;

        // then
        assert_eq!(
            response.status(),
            400,
            "The API did not return a 400 Bad Request when the payload had {description}"
        );
        assert_eq!(json_body(response).await["error"], "Email is required");
    }
}

#[tokio::test]
async fn sign_up_returns_400_for_malformed_emails() {
    // given
    let app = TestApp::spawn().await;

    for email in ["not-an-email", "@example.com", "renter@"] {
        // when
        let response = app.post_email(&json!({ "email": email })).await;

        // then
        assert_eq!(response.status(), 400, "`{email}` was accepted");
        assert_eq!(json_body(response).await["error"], "Invalid email format");
    }

    let signups = json_body(app.get_emails().await).await;
    assert_eq!(signups["emails"], json!([]));
}
