use crate::helpers::{deal_body, json_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn stats_are_zero_without_data() {
    // given
    let app = TestApp::spawn().await;

    // when
    let response = app.get_stats().await;

    // then
    assert_eq!(response.status(), 200);
    assert_eq!(
        json_body(response).await,
        json!({
            "totalDeals": 0,
            "averageSavings": 0,
            "totalEmails": 0,
            "citiesCovered": 0,
        })
    );
}

#[tokio::test]
async fn stats_aggregate_active_deals_and_signups() {
    // given
    let app = TestApp::spawn().await;
    app.create_deal(&deal_body("Austin", "1 month free", 1200, 1)).await;
    app.create_deal(&deal_body("austin", "2 months free", 1200, 1)).await;
    app.create_deal(&deal_body("Denver", "", 1500, 2)).await;
    let removed = app.create_deal(&deal_body("Boston", "3 months free", 3000, 1)).await;
    app.delete_deal(&format!("?id={}", removed["id"].as_str().unwrap()))
        .await;
    app.post_email(&json!({ "email": "renter@example.com" })).await;

    // when
    let stats = json_body(app.get_stats().await).await;

    // then
    // monthly savings: 100, 200, 0, averaged and annualized
    assert_eq!(stats["totalDeals"], 3);
    assert_eq!(stats["averageSavings"], 1200);
    assert_eq!(stats["totalEmails"], 1);
    assert_eq!(stats["citiesCovered"], 2);
}

#[tokio::test]
async fn signups_are_counted_without_active_deals() {
    // given
    let app = TestApp::spawn().await;
    app.post_email(&json!({ "email": "renter@example.com" })).await;

    // when
    let stats = json_body(app.get_stats().await).await;

    // then
    assert_eq!(stats["totalDeals"], 0);
    assert_eq!(stats["totalEmails"], 1);
}
