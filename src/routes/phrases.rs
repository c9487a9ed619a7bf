use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{LanguagePhrase, TravelType};
use crate::planning::phrases::group_by_category;
use crate::routes::{link_with_query, FacetLink, Feature, PageContext};
use crate::AppState;

#[derive(Template)]
#[template(path = "phrases/list.html")]
struct PhrasesTemplate {
    page: PageContext,
    travel_types: Vec<FacetLink>,
    heading: String,
    groups: Vec<PhraseGroup>,
}

struct PhraseGroup {
    category: String,
    phrases: Vec<LanguagePhrase>,
}

#[derive(Deserialize, Default)]
pub struct PhrasesQuery {
    #[serde(rename = "type")]
    travel_type: Option<TravelType>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/phrases", get(list_phrases))
}

async fn list_phrases(
    State(state): State<AppState>,
    Query(params): Query<PhrasesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;
    let selected = params.travel_type.unwrap_or(TravelType::Beach);

    let groups = group_by_category(store.phrases(selected))
        .into_iter()
        .map(|(category, phrases)| PhraseGroup {
            category,
            phrases: phrases.into_iter().cloned().collect(),
        })
        .collect();

    let template = PhrasesTemplate {
        page: PageContext::new(Feature::Phrases, &store),
        travel_types: TravelType::ALL
            .into_iter()
            .map(|t| FacetLink {
                label: format!("{} {}", t.icon(), t.label()),
                href: link_with_query("/phrases", &[("type", t.to_string().as_str())]),
                active: t == selected,
            })
            .collect(),
        heading: format!("{} Essential Phrases for {}", selected.icon(), selected.label()),
        groups,
    };
    Ok(Html(template.render()?))
}
