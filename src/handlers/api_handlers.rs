//! Read-only JSON listings over the public collections.

use crate::{
    errors::AppError,
    models::{image::Image, testimonial::Testimonial},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct ImagesQuery {
    pub category: Option<String>,
}

/// GET `/api/images?category=` — newest first, optional exact category filter.
pub async fn list_images(
    State(state): State<AppState>,
    Query(q): Query<ImagesQuery>,
) -> Result<Json<Vec<Image>>, AppError> {
    let images = state.site.images(q.category.as_deref()).await?;
    Ok(Json(images))
}

/// GET `/api/covers` — section_id → image_url.
pub async fn list_covers(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, String>>, AppError> {
    Ok(Json(state.site.covers().await?))
}

/// GET `/api/testimonials`
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    Ok(Json(state.site.testimonials().await?))
}
