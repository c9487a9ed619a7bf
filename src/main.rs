use chrono::{Duration, Utc};
use tokio::net::TcpListener;

use travelbuddy::config::Config;
use travelbuddy::store::TripStore;
use travelbuddy::{build_app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let now = Utc::now();
    let trip_start = now + Duration::days(config.trip_lead_days);
    let store = TripStore::seeded(now.date_naive(), Some(trip_start));

    let app = build_app(AppState::new(store));

    let listener = TcpListener::bind(config.bind_addr).await?;

    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
