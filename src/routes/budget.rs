use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    routing::{delete, get, post},
    Form, Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::BudgetItem;
use crate::planning::budget::{budget_categories, budget_summary, total_stays_finite};
use crate::planning::currency::{format_amount, parse_amount};
use crate::routes::{Feature, PageContext};
use crate::store::TripStore;
use crate::AppState;

const DEFAULT_CATEGORIES: [&str; 6] = [
    "Transportation",
    "Accommodation",
    "Food",
    "Activities",
    "Shopping",
    "Other",
];

#[derive(Template)]
#[template(path = "budget/list.html")]
struct BudgetTemplate {
    page: PageContext,
    total_budget: String,
    breakdown: Vec<CategoryView>,
    items: Vec<BudgetItemView>,
    category_options: Vec<String>,
    description: String,
    amount: String,
    category: String,
    errors: HashMap<String, String>,
}

struct CategoryView {
    category: String,
    amount: String,
    percentage: i64,
}

struct BudgetItemView {
    id: String,
    description: String,
    amount: String,
    category: String,
    date: String,
}

#[derive(Deserialize)]
pub struct BudgetForm {
    description: String,
    amount: String,
    category: String,
}

fn validate_budget_form(form: &BudgetForm, items: &[BudgetItem]) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if form.description.trim().is_empty() {
        errors.insert("description".to_string(), "Description is required".to_string());
    }

    match parse_amount(&form.amount) {
        None => {
            errors.insert("amount".to_string(), "Amount must be a number".to_string());
        }
        Some(amount) if !total_stays_finite(items, amount, form.category.trim()) => {
            errors.insert("amount".to_string(), "Amount is too large".to_string());
        }
        Some(_) => {}
    }

    if form.category.trim().is_empty() {
        errors.insert("category".to_string(), "Category is required".to_string());
    }

    errors
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/budget", get(show_budget))
        .route("/budget", post(add_item))
        .route("/budget/{id}", delete(delete_item))
}

fn money(value: f64) -> String {
    format!("${}", format_amount(value))
}

fn render_budget(
    store: &TripStore,
    description: String,
    amount: String,
    category: String,
    errors: HashMap<String, String>,
) -> Result<String, askama::Error> {
    let items = store.budget_items();
    let summary = budget_summary(items);

    let mut category_options: Vec<String> = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for c in budget_categories(items) {
        if !category_options.contains(&c) {
            category_options.push(c);
        }
    }

    let template = BudgetTemplate {
        page: PageContext::new(Feature::Budget, store),
        total_budget: money(summary.total_budget),
        breakdown: summary
            .category_totals
            .into_iter()
            .map(|c| CategoryView {
                amount: money(c.amount),
                percentage: c.percentage,
                category: c.category,
            })
            .collect(),
        items: items
            .iter()
            .map(|item| BudgetItemView {
                id: item.id.clone(),
                description: item.description.clone(),
                amount: money(item.amount),
                category: item.category.clone(),
                date: item.date.clone(),
            })
            .collect(),
        category_options,
        description,
        amount,
        category,
        errors,
    };
    template.render()
}

async fn show_budget(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;
    let html = render_budget(&store, String::new(), String::new(), String::new(), HashMap::new())?;
    Ok(Html(html))
}

async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<BudgetForm>,
) -> Result<impl IntoResponse, AppError> {
    let mut store = state.store.write().await;
    let errors = validate_budget_form(&form, store.budget_items());
    let amount = parse_amount(&form.amount);

    let Some(amount) = amount.filter(|_| errors.is_empty()) else {
        let html = render_budget(&store, form.description, form.amount, form.category, errors)?;
        return Ok(Html(html).into_response());
    };

    let item = BudgetItem::new(
        form.description.trim().to_string(),
        amount,
        form.category.trim().to_string(),
        Utc::now().date_naive(),
    );
    tracing::info!(item_id = %item.id, amount = item.amount, category = %item.category, "budget item added");
    store.add(item);

    Ok(Redirect::to("/budget").into_response())
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.store.write().await.remove::<BudgetItem>(&id) {
        tracing::info!(item_id = %id, "budget item removed");
    }
    ([("HX-Redirect", "/budget")], "")
}
