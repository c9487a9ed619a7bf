use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::{delete, get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::PackingItem;
use crate::planning::packing::{packing_categories, packing_progress};
use crate::routes::{link_with_query, non_blank, FacetLink, Feature, PageContext};
use crate::store::TripStore;
use crate::AppState;

/// Categories offered when adding an item, before any user-defined ones.
const DEFAULT_CATEGORIES: [&str; 7] = [
    "Clothing",
    "Documents",
    "Electronics",
    "Toiletries",
    "Health",
    "Comfort",
    "Other",
];

const MAX_NAME_CHARS: usize = 200;

#[derive(Template)]
#[template(path = "packing/list.html")]
struct PackingListTemplate {
    page: PageContext,
    items: Vec<PackingItemView>,
    categories: Vec<FacetLink>,
    category_options: Vec<String>,
    packed_count: usize,
    total_count: usize,
    percent_packed: i64,
    filter_active: bool,
    name: String,
    form_category: String,
    errors: HashMap<String, String>,
}

struct PackingItemView {
    id: String,
    name: String,
    category: String,
    packed: bool,
    essential: bool,
}

#[derive(Deserialize, Default)]
pub struct PackingQuery {
    category: Option<String>,
}

#[derive(Deserialize)]
pub struct PackingForm {
    name: String,
    category: String,
}

fn validate_packing_form(form: &PackingForm) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if form.name.trim().is_empty() {
        errors.insert("name".to_string(), "Item name is required".to_string());
    }

    if form.name.trim().chars().count() > MAX_NAME_CHARS {
        errors.insert(
            "name".to_string(),
            format!("Item name must be at most {MAX_NAME_CHARS} characters"),
        );
    }

    if form.category.trim().is_empty() {
        errors.insert("category".to_string(), "Category is required".to_string());
    }

    errors
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/packing", get(list_items))
        .route("/packing", post(add_item))
        .route("/packing/{id}/toggle", post(toggle_item))
        .route("/packing/{id}", delete(delete_item))
}

fn render_list(
    store: &TripStore,
    category: Option<&str>,
    name: String,
    form_category: String,
    errors: HashMap<String, String>,
) -> Result<String, askama::Error> {
    let progress = packing_progress(store.packing_items(), category);
    let categories = packing_categories(store.packing_items());

    let mut category_options: Vec<String> = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for c in &categories {
        if !category_options.contains(c) {
            category_options.push(c.clone());
        }
    }

    let template = PackingListTemplate {
        page: PageContext::new(Feature::Packing, store),
        items: progress
            .filtered_items
            .iter()
            .map(|item| PackingItemView {
                id: item.id.clone(),
                name: item.name.clone(),
                category: item.category.clone(),
                packed: item.packed,
                essential: item.essential,
            })
            .collect(),
        categories: categories
            .into_iter()
            .map(|c| FacetLink {
                href: link_with_query("/packing", &[("category", c.as_str())]),
                active: category == Some(c.as_str()),
                label: c,
            })
            .collect(),
        category_options,
        packed_count: progress.packed_count,
        total_count: progress.total_count,
        percent_packed: progress.percent_packed,
        filter_active: category.is_some(),
        name,
        form_category,
        errors,
    };
    template.render()
}

async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<PackingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;
    let category = non_blank(params.category);
    let html = render_list(&store, category.as_deref(), String::new(), String::new(), HashMap::new())?;
    Ok(Html(html))
}

async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<PackingForm>,
) -> Result<impl IntoResponse, AppError> {
    let errors = validate_packing_form(&form);
    if !errors.is_empty() {
        let store = state.store.read().await;
        let html = render_list(&store, None, form.name, form.category, errors)?;
        return Ok(Html(html).into_response());
    }

    let item = PackingItem::new(form.name, form.category.trim().to_string());
    tracing::info!(item_id = %item.id, name = %item.name, "packing item added");
    state.store.write().await.add(item);

    Ok(Redirect::to("/packing").into_response())
}

async fn toggle_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if !state.store.write().await.toggle_packed(&id) {
        tracing::debug!(item_id = %id, "toggle for unknown packing item");
    }
    Redirect::to("/packing")
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.store.write().await.remove::<PackingItem>(&id) {
        tracing::info!(item_id = %id, "packing item removed");
    }
    // htmx follows the redirect to re-render the list
    ([("HX-Redirect", "/packing")], "")
}
