use crate::services::{
    admin_service::AdminError, content_store::StoreError, object_store::ObjectStoreError,
    site_service::SiteError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// A lightweight wrapper for general errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    /// Shortcut for 404 Not Found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "status": self.status.as_u16()
        }));

        (self.status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => AppError::not_found(err.to_string()),
            StoreError::Sqlx(_) => {
                tracing::error!(error = %err, "content store failure");
                AppError::internal("content store unavailable")
            }
        }
    }
}

impl From<ObjectStoreError> for AppError {
    fn from(err: ObjectStoreError) -> Self {
        match err {
            ObjectStoreError::NotFound(_) => AppError::not_found(err.to_string()),
            ObjectStoreError::AlreadyExists(_) => {
                AppError::new(StatusCode::CONFLICT, err.to_string())
            }
            ObjectStoreError::InvalidPath(_) | ObjectStoreError::Empty => {
                AppError::bad_request(err.to_string())
            }
            ObjectStoreError::Io(_) => {
                tracing::error!(error = %err, "object store failure");
                AppError::internal("object store unavailable")
            }
        }
    }
}

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::InvalidCredentials => {
                AppError::new(StatusCode::UNAUTHORIZED, err.to_string())
            }
            AdminError::Validation(msg) => AppError::bad_request(msg),
            AdminError::SessionLifetime(_) => {
                tracing::error!(error = %err, "could not open admin session");
                AppError::internal("could not open a session")
            }
            AdminError::Store(inner) => inner.into(),
            AdminError::Objects(inner) => inner.into(),
        }
    }
}

impl From<SiteError> for AppError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::MissingFields(_) => AppError::bad_request(err.to_string()),
            SiteError::Store(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_http_statuses() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (
                StoreError::NotFound {
                    collection: "images",
                    id: 1,
                }
                .into(),
                StatusCode::NOT_FOUND,
            ),
            (AdminError::InvalidCredentials.into(), StatusCode::UNAUTHORIZED),
            (
                AdminError::Validation("Category is required".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AdminError::SessionLifetime(chrono::Duration::hours(1)).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ObjectStoreError::AlreadyExists("a/b.jpg".into()).into(),
                StatusCode::CONFLICT,
            ),
            (
                SiteError::MissingFields(vec!["email"]).into(),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status, status, "{}", err.message);
        }
    }
}
