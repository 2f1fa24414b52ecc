use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::state::AppState;

/// Name of the cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "portfolio_admin";

/// Session token from the admin cookie, if it parses.
pub fn session_token(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

/// A live admin session.
///
/// Add this as a handler parameter to require a logged-in admin. Requests
/// without a live session are sent back to the login form.
pub struct AdminSession {
    pub token: Uuid,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match session_token(&jar) {
            Some(token) if state.admin.is_authenticated(&token).await => Ok(AdminSession { token }),
            _ => Err(Redirect::to("/admin").into_response()),
        }
    }
}
