//! Admin console handlers.
//!
//! Every action re-fetches the dashboard and renders it with an inline status
//! line. Failures are logged and shown on the page with a matching HTTP status;
//! nothing is retried.

use crate::{
    errors::AppError,
    extractors::admin_session::{AdminSession, SESSION_COOKIE, session_token},
    models::{image::HeroFlags, testimonial::NewTestimonial},
    services::admin_service::{Dashboard, Upload},
    state::AppState,
    views::pages::{Notice, dashboard_page, login_page},
};
use axum::{
    Form,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{error, warn};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverForm {
    /// Target section; defaults to the image's own category.
    pub section_id: Option<String>,
}

/// Render the dashboard after an action, surfacing its outcome.
async fn dashboard_response(state: &AppState, outcome: Result<String, AppError>) -> Response {
    let (status, notice) = match outcome {
        Ok(text) => (StatusCode::OK, Notice::Success(text)),
        Err(err) => {
            warn!(status = %err.status, error = %err, "admin action failed");
            (err.status, Notice::Error(format!("Error: {}", err.message)))
        }
    };

    let dashboard = match state.admin.dashboard().await {
        Ok(dashboard) => dashboard,
        Err(err) => {
            error!(error = %err, "could not load dashboard");
            let err = AppError::from(err);
            let notice = Notice::Error(format!("Error loading dashboard: {}", err.message));
            let html = dashboard_page(&Dashboard::default(), Some(&notice)).into_string();
            return (err.status, Html(html)).into_response();
        }
    };
    (status, Html(dashboard_page(&dashboard, Some(&notice)).into_string())).into_response()
}

/// GET `/admin` — login form, or the dashboard for a live session.
pub async fn admin_home(State(state): State<AppState>, jar: CookieJar) -> Response {
    let authenticated = match session_token(&jar) {
        Some(token) => state.admin.is_authenticated(&token).await,
        None => false,
    };
    if !authenticated {
        return Html(login_page(None).into_string()).into_response();
    }

    match state.admin.dashboard().await {
        Ok(dashboard) => Html(dashboard_page(&dashboard, None).into_string()).into_response(),
        Err(err) => {
            error!(error = %err, "could not load dashboard");
            let err = AppError::from(err);
            let notice = Notice::Error(format!("Error loading dashboard: {}", err.message));
            (
                err.status,
                Html(dashboard_page(&Dashboard::default(), Some(&notice)).into_string()),
            )
                .into_response()
        }
    }
}

/// POST `/admin/login`
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.admin.login(&form.username, &form.password).await {
        Ok(token) => {
            let cookie = Cookie::build((SESSION_COOKIE, token.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            (jar.add(cookie), Redirect::to("/admin")).into_response()
        }
        Err(err) => {
            warn!(username = %form.username, error = %err, "admin login rejected");
            let err = AppError::from(err);
            (err.status, Html(login_page(Some(&err.message)).into_string())).into_response()
        }
    }
}

/// POST `/admin/logout`
pub async fn logout(
    State(state): State<AppState>,
    session: AdminSession,
    jar: CookieJar,
) -> Response {
    state.admin.logout(&session.token).await;
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/admin")).into_response()
}

/// Pull the `file` and `category` fields out of the upload form.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut file = None;
    let mut category = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("invalid upload form: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(format!("could not read file: {}", e)))?;
                file = Some((file_name, content_type, bytes));
            }
            Some("category") => {
                category = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::bad_request(format!("invalid category: {}", e)))?,
                );
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) =
        file.ok_or_else(|| AppError::bad_request("Choose an image to upload"))?;
    Ok(Upload {
        file_name,
        content_type,
        bytes,
        category: category.unwrap_or_default(),
    })
}

/// POST `/admin/images` (multipart: `file`, `category`)
pub async fn upload_image(
    State(state): State<AppState>,
    _session: AdminSession,
    multipart: Multipart,
) -> Response {
    let outcome = async {
        let upload = read_upload(multipart).await?;
        state.admin.upload(upload).await?;
        Ok::<String, AppError>("Upload successful!".to_string())
    }
    .await;
    dashboard_response(&state, outcome).await
}

/// POST `/admin/images/{id}/cover`
pub async fn set_cover(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
    Form(form): Form<CoverForm>,
) -> Response {
    let outcome = state
        .admin
        .set_cover_for_image(id, form.section_id.as_deref())
        .await
        .map(|cover| format!("Updated cover for {}", cover.section_id))
        .map_err(AppError::from);
    dashboard_response(&state, outcome).await
}

/// POST `/admin/images/{id}/hero`
pub async fn set_hero_flags(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
    Form(flags): Form<HeroFlags>,
) -> Response {
    let outcome = state
        .admin
        .set_hero_flags(id, flags)
        .await
        .map(|_| "Hero settings saved".to_string())
        .map_err(AppError::from);
    dashboard_response(&state, outcome).await
}

/// POST `/admin/images/{id}/delete`
pub async fn delete_image(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> Response {
    let outcome = state
        .admin
        .delete_image(id)
        .await
        .map(|_| "Image deleted".to_string())
        .map_err(AppError::from);
    dashboard_response(&state, outcome).await
}

/// POST `/admin/messages/{id}/delete`
pub async fn delete_message(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> Response {
    let outcome = state
        .admin
        .delete_message(id)
        .await
        .map(|_| "Message deleted".to_string())
        .map_err(AppError::from);
    dashboard_response(&state, outcome).await
}

/// POST `/admin/testimonials`
pub async fn add_testimonial(
    State(state): State<AppState>,
    _session: AdminSession,
    Form(testimonial): Form<NewTestimonial>,
) -> Response {
    let outcome = state
        .admin
        .add_testimonial(testimonial)
        .await
        .map(|t| format!("Added testimonial from {}", t.name))
        .map_err(AppError::from);
    dashboard_response(&state, outcome).await
}

/// POST `/admin/testimonials/{id}/delete`
pub async fn delete_testimonial(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> Response {
    let outcome = state
        .admin
        .delete_testimonial(id)
        .await
        .map(|_| "Testimonial deleted".to_string())
        .map_err(AppError::from);
    dashboard_response(&state, outcome).await
}
