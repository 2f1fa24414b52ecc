//! Route table for the public site, the admin console and the JSON listings.
//!
//! ## Structure
//! - **Public pages**
//!   - `GET  /` — marketing site (hero, gallery tiles, testimonials, contact)
//!   - `POST /contact` — contact form submission
//!   - `GET  /gallery/{category}` — masonry gallery for one category
//!
//! - **Admin console** (session cookie required except for login)
//!   - `GET  /admin`, `POST /admin/login`, `POST /admin/logout`
//!   - `POST /admin/images` — multipart upload
//!   - `POST /admin/images/{id}/cover|hero|delete`
//!   - `POST /admin/messages/{id}/delete`
//!   - `POST /admin/testimonials`, `POST /admin/testimonials/{id}/delete`
//!
//! - **Listings and objects**
//!   - `GET /api/images?category=`, `GET /api/covers`, `GET /api/testimonials`
//!   - `GET /storage/v1/object/public/{bucket}/{*path}` — stored image bytes

use crate::{
    handlers::{
        admin_handlers::{
            add_testimonial, admin_home, delete_image, delete_message, delete_testimonial, login,
            logout, set_cover, set_hero_flags, upload_image,
        },
        api_handlers::{list_covers, list_images, list_testimonials},
        health_handlers::{healthz, readyz},
        site_handlers::{gallery, home, submit_contact},
        storage_handlers::get_public_object,
    },
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Largest accepted upload form.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn routes() -> Router<AppState> {
    Router::new()
        // health endpoints
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // public site
        .route("/", get(home))
        .route("/contact", post(submit_contact))
        .route("/gallery/{category}", get(gallery))
        // admin console
        .route("/admin", get(admin_home))
        .route("/admin/login", post(login))
        .route("/admin/logout", post(logout))
        .route(
            "/admin/images",
            post(upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/admin/images/{id}/cover", post(set_cover))
        .route("/admin/images/{id}/hero", post(set_hero_flags))
        .route("/admin/images/{id}/delete", post(delete_image))
        .route("/admin/messages/{id}/delete", post(delete_message))
        .route("/admin/testimonials", post(add_testimonial))
        .route("/admin/testimonials/{id}/delete", post(delete_testimonial))
        // JSON listings
        .route("/api/images", get(list_images))
        .route("/api/covers", get(list_covers))
        .route("/api/testimonials", get(list_testimonials))
        // stored objects
        .route(
            "/storage/v1/object/public/{bucket}/{*path}",
            get(get_public_object),
        )
}
