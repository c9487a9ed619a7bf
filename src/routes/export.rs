use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{BudgetItem, Destination, PackingItem, TripDay};
use crate::planning::budget::budget_summary;
use crate::planning::packing::packing_progress;
use crate::AppState;

#[derive(Serialize)]
struct ExportTotals {
    packed_count: usize,
    total_count: usize,
    percent_packed: i64,
    total_budget: f64,
}

#[derive(Serialize)]
struct ExportData {
    exported_at: String,
    trip_start_date: Option<String>,
    selected_destination: Option<Destination>,
    packing_items: Vec<PackingItem>,
    trip_days: Vec<TripDay>,
    budget_items: Vec<BudgetItem>,
    totals: ExportTotals,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/export", get(export_plan))
}

async fn export_plan(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;

    let progress = packing_progress(store.packing_items(), None);
    let budget = budget_summary(store.budget_items());

    let export = ExportData {
        exported_at: chrono::Utc::now().to_rfc3339(),
        trip_start_date: store.trip_start_date().map(|d| d.to_rfc3339()),
        selected_destination: store.selected_destination().cloned(),
        packing_items: store.packing_items().to_vec(),
        trip_days: store.trip_days().to_vec(),
        budget_items: store.budget_items().to_vec(),
        totals: ExportTotals {
            packed_count: progress.packed_count,
            total_count: progress.total_count,
            percent_packed: progress.percent_packed,
            total_budget: budget.total_budget,
        },
    };

    let filename = format!("travelbuddy-plan-{}.json", chrono::Local::now().format("%Y-%m-%d"));
    let content_disposition = format!("attachment; filename=\"{}\"", filename);

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&content_disposition)?,
    );

    Ok((headers, Json(export)))
}
