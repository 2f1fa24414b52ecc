use crate::services::{
    admin_service::{AdminCredentials, AdminService},
    content_store::ContentStore,
    object_store::ObjectStore,
    site_service::SiteService,
};
use chrono::Duration;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub site: SiteService,
    pub admin: AdminService,
    pub content: Arc<dyn ContentStore>,
    pub objects: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(
        content: Arc<dyn ContentStore>,
        objects: Arc<dyn ObjectStore>,
        credentials: Option<AdminCredentials>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            site: SiteService::new(content.clone()),
            admin: AdminService::new(content.clone(), objects.clone(), credentials, session_ttl),
            content,
            objects,
        }
    }
}
