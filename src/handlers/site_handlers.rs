//! Public pages: the marketing site, category galleries and the contact form.

use crate::{
    errors::AppError,
    models::message::NewMessage,
    state::AppState,
    views::pages::{Notice, gallery_page, home_page},
};
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;
use uuid::Uuid;

/// GET `/`
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let page = state.site.home().await;
    Html(home_page(&page, &Uuid::new_v4().to_string(), None).into_string())
}

/// POST `/contact` — store the message and re-render the page with a status line.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(message): Form<NewMessage>,
) -> Response {
    let (status, notice) = match state.site.submit_contact(message).await {
        Ok(_) => (
            StatusCode::OK,
            Notice::Success("Thank you! Your message has been sent.".into()),
        ),
        Err(err) => {
            let err = AppError::from(err);
            warn!(error = %err, "contact submission failed");
            (err.status, Notice::Error(format!("Error: {}", err.message)))
        }
    };

    let page = state.site.home().await;
    let html = home_page(&page, &Uuid::new_v4().to_string(), Some(&notice)).into_string();
    (status, Html(html)).into_response()
}

/// GET `/gallery/{category}` — the path segment arrives percent-decoded.
pub async fn gallery(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Html<String> {
    let page = state.site.gallery(&category).await;
    Html(gallery_page(&page).into_string())
}
