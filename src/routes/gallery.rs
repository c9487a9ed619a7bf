use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::models::GalleryImage;
use crate::routes::{Feature, PageContext};
use crate::AppState;

#[derive(Template)]
#[template(path = "gallery/list.html")]
struct GalleryTemplate {
    page: PageContext,
    images: Vec<GalleryImage>,
}

#[derive(Template)]
#[template(path = "gallery/show.html")]
struct GalleryImageTemplate {
    page: PageContext,
    image: GalleryImage,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gallery", get(list_images))
        .route("/gallery/{id}", get(show_image))
}

async fn list_images(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;
    let template = GalleryTemplate {
        page: PageContext::new(Feature::Gallery, &store),
        images: store.gallery_images().to_vec(),
    };
    Ok(Html(template.render()?))
}

async fn show_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;
    let image = store.gallery_image(&id).cloned().ok_or(AppError::NotFound)?;
    let template = GalleryImageTemplate {
        page: PageContext::new(Feature::Gallery, &store),
        image,
    };
    Ok(Html(template.render()?))
}
