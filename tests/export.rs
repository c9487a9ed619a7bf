mod common;

use axum::http::StatusCode;
use common::{body_string, TestApp};

#[tokio::test]
async fn export_returns_json_with_plan() {
    let app = TestApp::new();
    app.post_form("/packing/1/toggle", "").await;
    app.post_form("/destinations/3/select", "").await;

    let resp = app.get("/export").await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Check Content-Disposition header
    let content_disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_disposition.starts_with("attachment; filename="));
    assert!(content_disposition.contains("travelbuddy-plan-"));

    let body = body_string(resp).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert!(json["exported_at"].is_string());
    assert!(json["trip_start_date"].is_string());
    assert_eq!(json["selected_destination"]["name"], "New York");
    assert_eq!(json["packing_items"].as_array().unwrap().len(), 10);
    assert_eq!(json["packing_items"][0]["packed"], true);
    assert_eq!(json["trip_days"][0]["activities"].as_array().unwrap().len(), 3);
    assert_eq!(json["totals"]["percent_packed"], 10);
    assert_eq!(json["totals"]["total_budget"], 4300.0);
}

#[tokio::test]
async fn export_without_selection_has_null_destination() {
    let app = TestApp::new();
    let body = body_string(app.get("/export").await).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["selected_destination"].is_null());
}
