mod common;

use common::{assert_redirect, TestApp};

#[tokio::test]
async fn root_redirects_to_destinations() {
    let app = TestApp::new();
    let resp = app.get("/").await;
    assert_redirect(&resp, "/destinations");
}

#[tokio::test]
async fn health_check() {
    let app = TestApp::new();
    assert_eq!(app.page("/health").await, "ok");
}

#[tokio::test]
async fn lists_all_destinations_with_region_facets() {
    let app = TestApp::new();
    let html = app.page("/destinations").await;
    assert!(html.contains("Explore Destinations"));
    for name in ["Paris", "Tokyo", "New York", "Sydney", "Cape Town", "Rio de Janeiro"] {
        assert!(html.contains(name), "missing {name}");
    }
    assert!(html.contains("href=\"/destinations?region=North+America\""));
}

#[tokio::test]
async fn region_filter_narrows_the_grid() {
    let app = TestApp::new();
    let html = app.page("/destinations?region=Asia").await;
    assert!(html.contains("Tokyo"));
    assert!(!html.contains("Cape Town"));
}

#[tokio::test]
async fn search_matches_descriptions() {
    let app = TestApp::new();
    let html = app.page("/destinations?q=BEACHES").await;
    assert!(html.contains("Sydney"));
    assert!(html.contains("Rio de Janeiro"));
    assert!(!html.contains("Paris"));
}

#[tokio::test]
async fn unmatched_filters_show_empty_state() {
    let app = TestApp::new();
    let html = app.page("/destinations?region=Antarctica").await;
    assert!(html.contains("No destinations match your filters."));
}

#[tokio::test]
async fn selecting_a_destination_shows_it_in_the_header() {
    let app = TestApp::new();
    let resp = app.post_form("/destinations/2/select", "").await;
    assert_redirect(&resp, "/destinations");

    assert_eq!(
        app.state.store.read().await.selected_destination().map(|d| d.name.clone()),
        Some("Tokyo".to_string())
    );

    // The selection is visible from every feature
    let html = app.page("/budget").await;
    assert!(html.contains("Planning a trip to 🇯🇵 Tokyo"));
}

#[tokio::test]
async fn selecting_unknown_destination_changes_nothing() {
    let app = TestApp::new();
    let resp = app.post_form("/destinations/missing/select", "").await;
    assert_redirect(&resp, "/destinations");
    assert!(app.state.store.read().await.selected_destination().is_none());
}

#[tokio::test]
async fn clearing_the_selection() {
    let app = TestApp::new();
    app.post_form("/destinations/1/select", "").await;
    let resp = app.post_form("/destinations/clear", "").await;
    assert_redirect(&resp, "/destinations");
    let html = app.page("/destinations").await;
    assert!(!html.contains("Planning a trip to"));
}
