mod common;

use common::TestApp;

#[tokio::test]
async fn defaults_to_hundred_dollars_in_euros() {
    let app = TestApp::new();
    let html = app.page("/currency").await;
    assert!(html.contains("€93.00"));
    assert!(html.contains("1 USD = 0.9300 EUR"));
}

#[tokio::test]
async fn converts_between_non_dollar_currencies() {
    let app = TestApp::new();
    let html = app.page("/currency?amount=152&from=AUD&to=GBP").await;
    assert!(html.contains("£79.00"));
}

#[tokio::test]
async fn swap_link_reverses_the_pair() {
    let app = TestApp::new();
    let html = app.page("/currency?amount=50&from=USD&to=JPY").await;
    assert!(html.contains("href=\"/currency?amount=50&amp;from=JPY&amp;to=USD\""));

    let html = app.page("/currency?amount=50&from=JPY&to=USD").await;
    assert!(html.contains("$0.33"));
}

#[tokio::test]
async fn bad_amount_gives_no_result() {
    let app = TestApp::new();
    let html = app.page("/currency?amount=abc&from=USD&to=EUR").await;
    assert!(html.contains("No result."));
}

#[tokio::test]
async fn unknown_currency_gives_no_result() {
    let app = TestApp::new();
    let html = app.page("/currency?amount=10&from=USD&to=XYZ").await;
    assert!(html.contains("No result."));
    assert!(!html.contains("1 USD ="));
}

#[tokio::test]
async fn overflowing_amount_gives_no_result() {
    let app = TestApp::new();
    let html = app.page("/currency?amount=1e308&from=USD&to=JPY").await;
    assert!(html.contains("No result."));
    assert!(!html.contains("¥inf"));
}
