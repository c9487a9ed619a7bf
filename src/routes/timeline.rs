use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::{delete, get, post},
    Form, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{Activity, TripDay};
use crate::planning::timeline::{days_until, is_time_of_day, next_day_date, sorted_activities};
use crate::routes::{link_with_query, non_blank, Feature, PageContext};
use crate::store::TripStore;
use crate::AppState;

#[derive(Template)]
#[template(path = "timeline/show.html")]
struct TimelineTemplate {
    page: PageContext,
    countdown: Option<String>,
    start_date: String,
    days: Vec<DaySummary>,
    selected: Option<DayDetail>,
    activity_form: ActivityFormValues,
    errors: HashMap<String, String>,
}

struct DaySummary {
    id: String,
    date: String,
    activity_count: usize,
    href: String,
    active: bool,
}

struct DayDetail {
    id: String,
    date: String,
    notes: String,
    activities: Vec<ActivityView>,
}

struct ActivityView {
    id: String,
    time: String,
    description: String,
    location: String,
}

#[derive(Default)]
struct ActivityFormValues {
    time: String,
    description: String,
    location: String,
}

#[derive(Deserialize, Default)]
pub struct TimelineQuery {
    day: Option<String>,
}

#[derive(Deserialize)]
pub struct StartDateForm {
    start_date: String,
}

#[derive(Deserialize)]
pub struct NotesForm {
    notes: String,
}

#[derive(Deserialize)]
pub struct ActivityForm {
    time: String,
    description: String,
    location: Option<String>,
}

fn validate_activity_form(form: &ActivityForm) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if !is_time_of_day(form.time.trim()) {
        errors.insert("time".to_string(), "Time must be HH:MM (24-hour)".to_string());
    }

    if form.description.trim().is_empty() {
        errors.insert("description".to_string(), "Description is required".to_string());
    }

    errors
}

fn countdown_label(days: i64) -> String {
    match days {
        0 => "Your trip starts today!".to_string(),
        1 => "1 day until your trip".to_string(),
        d if d > 1 => format!("{d} days until your trip"),
        -1 => "Your trip started 1 day ago".to_string(),
        d => format!("Your trip started {} days ago", -d),
    }
}

fn day_href(id: &str) -> String {
    link_with_query("/timeline", &[("day", id)])
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timeline", get(show_timeline))
        .route("/timeline/start", post(set_start_date))
        .route("/timeline/days", post(add_day))
        .route("/timeline/days/{id}", delete(delete_day))
        .route("/timeline/days/{id}/notes", post(update_notes))
        .route("/timeline/days/{id}/activities", post(add_activity))
        .route("/timeline/days/{id}/activities/{activity_id}", delete(delete_activity))
}

fn render_timeline(
    store: &TripStore,
    day_id: Option<&str>,
    activity_form: ActivityFormValues,
    errors: HashMap<String, String>,
) -> Result<String, askama::Error> {
    let start = store.trip_start_date();

    let selected = day_id
        .and_then(|id| store.get::<TripDay>(id))
        .map(|day| DayDetail {
            id: day.id.clone(),
            date: day.date.clone(),
            notes: day.notes.clone(),
            activities: sorted_activities(&day.activities)
                .into_iter()
                .map(|a| ActivityView {
                    id: a.id.clone(),
                    time: a.time.clone(),
                    description: a.description.clone(),
                    location: a.location.clone(),
                })
                .collect(),
        });

    let template = TimelineTemplate {
        page: PageContext::new(Feature::Timeline, store),
        countdown: start.map(|s| countdown_label(days_until(s, Utc::now()))),
        start_date: start
            .map(|s| s.date_naive().format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        days: store
            .trip_days()
            .iter()
            .map(|day| DaySummary {
                id: day.id.clone(),
                date: day.date.clone(),
                activity_count: day.activities.len(),
                href: day_href(&day.id),
                active: day_id == Some(day.id.as_str()),
            })
            .collect(),
        selected,
        activity_form,
        errors,
    };
    template.render()
}

async fn show_timeline(
    State(state): State<AppState>,
    Query(params): Query<TimelineQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;
    let day = non_blank(params.day);
    let html = render_timeline(&store, day.as_deref(), ActivityFormValues::default(), HashMap::new())?;
    Ok(Html(html))
}

async fn set_start_date(
    State(state): State<AppState>,
    Form(form): Form<StartDateForm>,
) -> Result<impl IntoResponse, AppError> {
    let raw = form.start_date.trim();
    let mut store = state.store.write().await;

    if raw.is_empty() {
        store.set_trip_start_date(None);
        return Ok(Redirect::to("/timeline").into_response());
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => {
            let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
            store.set_trip_start_date(Some(start));
            tracing::info!(start_date = %date, "trip start date set");
            Ok(Redirect::to("/timeline").into_response())
        }
        Err(_) => {
            let mut errors = HashMap::new();
            errors.insert("start_date".to_string(), "Start date must be YYYY-MM-DD".to_string());
            let html = render_timeline(&store, None, ActivityFormValues::default(), errors)?;
            Ok(Html(html).into_response())
        }
    }
}

async fn add_day(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut store = state.store.write().await;

    let Some(date) = next_day_date(store.trip_days(), store.trip_start_date()) else {
        let mut errors = HashMap::new();
        errors.insert("day".to_string(), "Set a trip start date first".to_string());
        let html = render_timeline(&store, None, ActivityFormValues::default(), errors)?;
        return Ok(Html(html).into_response());
    };

    let day = TripDay::new(date);
    let href = day_href(&day.id);
    tracing::info!(day_id = %day.id, date = %day.date, "trip day added");
    store.add(day);

    Ok(Redirect::to(&href).into_response())
}

async fn delete_day(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.store.write().await.remove::<TripDay>(&id) {
        tracing::info!(day_id = %id, "trip day removed");
    }
    ([("HX-Redirect", "/timeline")], "")
}

async fn update_notes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<NotesForm>,
) -> impl IntoResponse {
    if !state.store.write().await.set_day_notes(&id, form.notes) {
        return Redirect::to("/timeline");
    }
    Redirect::to(&day_href(&id))
}

async fn add_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ActivityForm>,
) -> Result<impl IntoResponse, AppError> {
    let mut store = state.store.write().await;

    if store.get::<TripDay>(&id).is_none() {
        return Ok(Redirect::to("/timeline").into_response());
    }

    let errors = validate_activity_form(&form);
    if !errors.is_empty() {
        let values = ActivityFormValues {
            time: form.time,
            description: form.description,
            location: form.location.unwrap_or_default(),
        };
        let html = render_timeline(&store, Some(&id), values, errors)?;
        return Ok(Html(html).into_response());
    }

    let activity = Activity::new(
        form.time.trim().to_string(),
        form.description.trim().to_string(),
        form.location,
    );
    tracing::info!(day_id = %id, activity_id = %activity.id, "activity added");
    store.add_activity(&id, activity);

    Ok(Redirect::to(&day_href(&id)).into_response())
}

async fn delete_activity(
    State(state): State<AppState>,
    Path((id, activity_id)): Path<(String, String)>,
) -> impl IntoResponse {
    if state.store.write().await.remove_activity(&id, &activity_id) {
        tracing::info!(day_id = %id, activity_id = %activity_id, "activity removed");
    }
    let href = day_href(&id);
    ([("HX-Redirect", href)], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_labels() {
        assert_eq!(countdown_label(30), "30 days until your trip");
        assert_eq!(countdown_label(1), "1 day until your trip");
        assert_eq!(countdown_label(0), "Your trip starts today!");
        assert_eq!(countdown_label(-1), "Your trip started 1 day ago");
        assert_eq!(countdown_label(-4), "Your trip started 4 days ago");
    }

    #[test]
    fn activity_requires_time_and_description() {
        let form = ActivityForm {
            time: "9am".to_string(),
            description: "".to_string(),
            location: None,
        };
        let errors = validate_activity_form(&form);
        assert!(errors.contains_key("time"));
        assert!(errors.contains_key("description"));
    }
}
