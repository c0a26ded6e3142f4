use crate::helpers::{deal_body, json_body, TestApp};
use uuid::Uuid;

const REALM: &str = r#"Basic realm="admin""#;

#[tokio::test]
async fn requests_missing_authorization_are_rejected() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.post_deal_no_auth(&deal_body("Austin", "", 1500, 1)).await;

    // then
    assert_eq!(response.status(), 401);
    assert_eq!(response.headers()["WWW-Authenticate"], REALM);
    let deals = json_body(app.get_deals("").await).await;
    assert_eq!(deals["deals"], serde_json::json!([]));
}

#[tokio::test]
async fn unknown_admin_is_rejected() {
    // given
    let app = TestApp::spawn().await;
    let username = Uuid::new_v4().to_string();

    // when
    let response = app
        .post_deal_with_credentials(
            &deal_body("Austin", "", 1500, 1),
            &username,
            &app.admin.password,
        )
        .await;

    // then
    assert_eq!(response.status(), 401);
    assert_eq!(response.headers()["WWW-Authenticate"], REALM);
}

#[tokio::test]
async fn invalid_password_is_rejected() {
    // given
    let app = TestApp::spawn().await;
    let password = Uuid::new_v4().to_string();

    // when
    let response = app
        .post_deal_with_credentials(
            &deal_body("Austin", "", 1500, 1),
            &app.admin.username,
            &password,
        )
        .await;

    // then
    assert_eq!(response.status(), 401);
    assert_eq!(response.headers()["WWW-Authenticate"], REALM);
}

#[tokio::test]
async fn signup_list_requires_admin_credentials() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_emails_no_auth().await;

    // then
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn configured_admin_is_accepted() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app
        .post_deal_with_credentials(
            &deal_body("Austin", "", 1500, 1),
            &app.admin.username,
            &app.admin.password,
        )
        .await;

    // then
    assert_eq!(response.status(), 201);
}
