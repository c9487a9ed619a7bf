mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn defaults_to_beach_phrases() {
    let app = TestApp::new();
    let html = app.page("/phrases").await;
    assert!(html.contains("Essential Phrases for Beach Vacation"));
    assert!(html.contains("Where is the beach?"));
    assert!(html.contains("Navigation"));
}

#[tokio::test]
async fn travel_type_selects_the_phrase_set() {
    let app = TestApp::new();
    let html = app.page("/phrases?type=mountain").await;
    assert!(html.contains("Essential Phrases for Mountain Adventure"));
    assert!(html.contains("Is it safe to climb?"));
    assert!(html.contains("Safety"));
    assert!(!html.contains("Where is the beach?"));
}

#[tokio::test]
async fn unknown_travel_type_is_rejected() {
    let app = TestApp::new();
    let resp = app.get("/phrases?type=space").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
