//! Photography studio portfolio site: the public marketing pages, category
//! galleries, a contact form and a password-gated admin console, all backed by
//! SQLite records and a local object store for the uploaded images.

pub mod config;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;

use axum::Router;
use state::AppState;

/// Full application router with its shared state attached.
pub fn app(state: AppState) -> Router {
    routes::routes::routes().with_state(state)
}
