use crate::helpers::{deal_body, ids, json_body, temporary_document, TestApp};
use serde_json::json;

#[tokio::test]
async fn deals_and_signups_survive_a_restart() {
    // given
    let document = temporary_document();
    let first = TestApp::spawn_with_document(&document).await;
    let deal = first.create_deal(&deal_body("Austin", "1 month free", 1200, 1)).await;
    first
        .post_email(&json!({ "email": "renter@example.com" }))
        .await;

    // when
    let second = TestApp::spawn_with_document(&document).await;

    // then
    let deals = json_body(second.get_deals("").await).await;
    assert_eq!(ids(&deals["deals"]), vec![deal["id"].as_str().unwrap()]);
    let signups = json_body(second.get_emails().await).await;
    assert_eq!(signups["emails"].as_array().map(Vec::len), Some(1));

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&document).unwrap()).unwrap();
    assert!(stored["deals"].is_array());
    assert!(stored["emails"].is_array());
}

#[tokio::test]
async fn a_missing_document_reads_as_empty() {
    // given
    let app = TestApp::spawn_with_document(&temporary_document()).await;

    // when
    let response = app.get_deals("").await;

    // then
    assert_eq!(response.status(), 200);
    assert_eq!(json_body(response).await["deals"], json!([]));
}

#[tokio::test]
async fn a_corrupt_document_reads_as_empty_and_is_not_overwritten() {
    // given
    let document = temporary_document();
    std::fs::create_dir_all(document.parent().unwrap()).unwrap();
    std::fs::write(&document, "{ not json").unwrap();
    let app = TestApp::spawn_with_document(&document).await;

    // when
    let listing = app.get_deals("").await;
    let create = app.post_deal(&deal_body("Austin", "", 1500, 1)).await;

    // then
    assert_eq!(listing.status(), 200);
    assert_eq!(json_body(listing).await["deals"], json!([]));
    assert_eq!(create.status(), 500);
    assert_eq!(std::fs::read_to_string(&document).unwrap(), "{ not json");
}

#[tokio::test]
async fn existing_deals_survive_a_create_when_one_record_cannot_be_decoded() {
    // given
    let document = temporary_document();
    let stored = |id: &str, rent: serde_json::Value| {
        json!({
            "id": id,
            "property_name": "The Lofts",
            "address": "1 Main St",
            "city": "Austin",
            "state": "TX",
            "zip": "78701",
            "deal_description": "",
            "regular_rent": rent,
            "effective_rent": rent,
            "bedrooms": 1,
            "found_at": "2025-01-15"
        })
    };
    let contents = json!({
        "deals": [stored("old-1", json!(1850)), stored("old-2", json!(1850.5))],
    })
    .to_string();
    std::fs::create_dir_all(document.parent().unwrap()).unwrap();
    std::fs::write(&document, &contents).unwrap();
    let app = TestApp::spawn_with_document(&document).await;

    // when
    let create = app.post_deal(&deal_body("Austin", "", 1500, 1)).await;

    // then
    assert_eq!(create.status(), 500);
    assert_eq!(std::fs::read_to_string(&document).unwrap(), contents);
}
