use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::Currency;
use crate::planning::currency::{convert, find_currency, format_amount, Conversion};
use crate::routes::{link_with_query, Feature, PageContext};
use crate::AppState;

#[derive(Template)]
#[template(path = "currency/converter.html")]
struct ConverterTemplate {
    page: PageContext,
    currencies: Vec<Currency>,
    amount: String,
    from: String,
    to: String,
    result: Option<String>,
    /// "1 USD = 0.9300 EUR"
    rate_line: Option<String>,
    swap_href: String,
}

#[derive(Deserialize, Default)]
pub struct ConverterQuery {
    amount: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

impl ConverterQuery {
    fn into_conversion(self) -> Conversion {
        let defaults = Conversion::default();
        Conversion {
            amount: self.amount.unwrap_or(defaults.amount),
            from: self.from.filter(|s| !s.is_empty()).unwrap_or(defaults.from),
            to: self.to.filter(|s| !s.is_empty()).unwrap_or(defaults.to),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/currency", get(show_converter))
}

async fn show_converter(
    State(state): State<AppState>,
    Query(params): Query<ConverterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;
    let currencies = store.currencies();
    let conversion = params.into_conversion();

    let result = conversion.result(currencies).map(|value| {
        let symbol = find_currency(currencies, &conversion.to)
            .map(|c| c.symbol.as_str())
            .unwrap_or_default();
        format!("{symbol}{}", format_amount(value))
    });
    let rate_line = convert(1.0, &conversion.from, &conversion.to, currencies)
        .map(|rate| format!("1 {} = {rate:.4} {}", conversion.from, conversion.to));

    let swapped = conversion.swapped();
    let swap_href = link_with_query(
        "/currency",
        &[
            ("amount", swapped.amount.as_str()),
            ("from", swapped.from.as_str()),
            ("to", swapped.to.as_str()),
        ],
    );

    let template = ConverterTemplate {
        page: PageContext::new(Feature::Currency, &store),
        currencies: currencies.to_vec(),
        amount: conversion.amount,
        from: conversion.from,
        to: conversion.to,
        result,
        rate_line,
        swap_href,
    };
    Ok(Html(template.render()?))
}
