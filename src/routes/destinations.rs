use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::planning::destinations::{filter_destinations, regions};
use crate::routes::{link_with_query, non_blank, FacetLink, Feature, PageContext};
use crate::AppState;

#[derive(Template)]
#[template(path = "destinations/list.html")]
struct DestinationListTemplate {
    page: PageContext,
    destinations: Vec<DestinationView>,
    regions: Vec<FacetLink>,
    all_regions_href: String,
    region: Option<String>,
    query: String,
}

struct DestinationView {
    id: String,
    name: String,
    region: String,
    emoji: String,
    image_url: String,
    description: String,
    selected: bool,
}

#[derive(Deserialize, Default)]
pub struct DestinationQuery {
    region: Option<String>,
    q: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(list_destinations))
        .route("/destinations/clear", post(clear_selection))
        .route("/destinations/{id}/select", post(select_destination))
}

async fn list_destinations(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;

    let region = non_blank(params.region);
    let query = params.q.unwrap_or_default();
    let selected_id = store.selected_destination().map(|d| d.id.clone());

    let destinations = filter_destinations(store.destinations(), region.as_deref(), Some(query.as_str()))
        .into_iter()
        .map(|d| DestinationView {
            selected: selected_id.as_deref() == Some(d.id.as_str()),
            id: d.id.clone(),
            name: d.name.clone(),
            region: d.region.clone(),
            emoji: d.emoji.clone(),
            image_url: d.image_url.clone(),
            description: d.description.clone(),
        })
        .collect();

    let facets = regions(store.destinations())
        .into_iter()
        .map(|r| FacetLink {
            href: link_with_query("/destinations", &[("region", r.as_str()), ("q", query.as_str())]),
            active: region.as_deref() == Some(r.as_str()),
            label: r,
        })
        .collect();

    let template = DestinationListTemplate {
        page: PageContext::new(Feature::Destinations, &store),
        destinations,
        regions: facets,
        all_regions_href: link_with_query("/destinations", &[("q", query.as_str())]),
        region,
        query,
    };
    Ok(Html(template.render()?))
}

async fn select_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    if store.select_destination(&id) {
        tracing::info!(destination_id = %id, "destination selected");
    }
    Redirect::to("/destinations")
}

async fn clear_selection(State(state): State<AppState>) -> impl IntoResponse {
    state.store.write().await.set_selected_destination(None);
    Redirect::to("/destinations")
}
