//! src/services/admin_service.rs
//!
//! AdminService — the admin console's workflow: the credential gate, image
//! upload, cover assignment, and the delete actions for images, messages and
//! testimonials.
//!
//! Multi-step actions are deliberately non-atomic:
//! - upload writes the object first and then inserts the row; a failed insert
//!   leaves the stored object behind;
//! - delete-image tries to remove the object first and then always deletes the
//!   row, so a broken entry never lingers because of a storage failure.

use crate::{
    models::{
        image::{HeroFlags, Image, NewImage},
        message::Message,
        section::SectionId,
        section_cover::SectionCover,
        testimonial::{NewTestimonial, Testimonial},
    },
    services::{
        content_store::{ContentStore, StoreError},
        object_store::{ObjectStore, ObjectStoreError, storage_path_from_url},
    },
};
use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error("session lifetime {0} is out of range")]
    SessionLifetime(Duration),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Objects(#[from] ObjectStoreError),
}

pub type AdminResult<T> = Result<T, AdminError>;

/// Username/password pair the console gate accepts. Held server-side only.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// In-memory session tokens with their expiry. Lost on restart.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, DateTime<Utc>>>>,
}

impl SessionStore {
    async fn issue(&self, ttl: Duration) -> AdminResult<Uuid> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(ttl)
            .ok_or(AdminError::SessionLifetime(ttl))?;
        let token = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, expires| *expires > now);
        sessions.insert(token, expires);
        Ok(token)
    }

    async fn is_live(&self, token: &Uuid) -> bool {
        let sessions = self.sessions.read().await;
        sessions
            .get(token)
            .is_some_and(|expires| *expires > Utc::now())
    }

    async fn revoke(&self, token: &Uuid) {
        self.sessions.write().await.remove(token);
    }
}

/// A file picked in the upload form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
    pub category: String,
}

/// Everything the dashboard lists after login.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub messages: Vec<Message>,
    pub images: Vec<Image>,
    /// section_id → image_url, for constant-time cover lookups while rendering.
    pub covers: HashMap<String, String>,
    pub testimonials: Vec<Testimonial>,
}

impl Dashboard {
    /// Whether `image` is the current cover of the section named by its category.
    pub fn is_cover(&self, image: &Image) -> bool {
        self.covers
            .get(&image.category)
            .is_some_and(|url| *url == image.url)
    }
}

#[derive(Clone)]
pub struct AdminService {
    content: Arc<dyn ContentStore>,
    objects: Arc<dyn ObjectStore>,
    credentials: Option<AdminCredentials>,
    sessions: SessionStore,
    session_ttl: Duration,
}

/// Storage path for an upload: `{category}/{timestamp}.{extension}`.
///
/// The extension is whatever follows the last `.` in the file name; a name
/// without a dot contributes itself.
pub fn upload_path(category: &str, file_name: &str, timestamp_millis: i64) -> String {
    let extension = file_name.rsplit('.').next().unwrap_or(file_name);
    format!("{category}/{timestamp_millis}.{extension}")
}

/// Fold cover rows into a section → URL map.
pub fn cover_map(covers: Vec<SectionCover>) -> HashMap<String, String> {
    covers
        .into_iter()
        .map(|cover| (cover.section_id, cover.image_url))
        .collect()
}

impl AdminService {
    pub fn new(
        content: Arc<dyn ContentStore>,
        objects: Arc<dyn ObjectStore>,
        credentials: Option<AdminCredentials>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            content,
            objects,
            credentials,
            sessions: SessionStore::default(),
            session_ttl,
        }
    }

    /// Check credentials and open a session. Never touches the content store.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> AdminResult<Uuid> {
        let Some(credentials) = &self.credentials else {
            warn!("admin login attempted but no credentials are configured");
            return Err(AdminError::InvalidCredentials);
        };
        if !credentials.matches(username, password) {
            return Err(AdminError::InvalidCredentials);
        }
        let token = self.sessions.issue(self.session_ttl).await?;
        info!("admin session opened");
        Ok(token)
    }

    pub async fn is_authenticated(&self, token: &Uuid) -> bool {
        self.sessions.is_live(token).await
    }

    pub async fn logout(&self, token: &Uuid) {
        self.sessions.revoke(token).await;
    }

    /// Fetch every collection the dashboard shows.
    pub async fn dashboard(&self) -> AdminResult<Dashboard> {
        let messages = self.content.list_messages().await?;
        let images = self.content.list_images(None).await?;
        let covers = cover_map(self.content.list_covers().await?);
        let testimonials = self.content.list_testimonials().await?;
        Ok(Dashboard {
            messages,
            images,
            covers,
            testimonials,
        })
    }

    /// Store the file, then record it in the images collection.
    #[instrument(skip(self, upload), fields(file = %upload.file_name, category = %upload.category))]
    pub async fn upload(&self, upload: Upload) -> AdminResult<Image> {
        let category = upload.category.trim();
        if category.is_empty() {
            return Err(AdminError::Validation("Category is required".into()));
        }
        if upload.bytes.is_empty() {
            return Err(AdminError::Validation("Choose an image to upload".into()));
        }

        let path = upload_path(category, &upload.file_name, Utc::now().timestamp_millis());
        self.objects
            .upload(&path, upload.bytes, upload.content_type.as_deref())
            .await?;
        let url = self.objects.public_url(&path);

        let image = self
            .content
            .insert_image(&NewImage {
                url,
                category: category.to_string(),
            })
            .await?;
        info!(id = image.id, path = %path, "image uploaded");
        Ok(image)
    }

    /// Make `image_url` the cover of `section_id`, replacing any previous one.
    #[instrument(skip(self))]
    pub async fn set_cover(&self, image_url: &str, section_id: &str) -> AdminResult<SectionCover> {
        let section: SectionId = section_id
            .parse()
            .map_err(|err| AdminError::Validation(format!("{err}")))?;
        let cover = self
            .content
            .upsert_cover(&SectionCover {
                section_id: section.as_str().to_string(),
                image_url: image_url.to_string(),
            })
            .await?;
        info!(section = %section, "cover updated");
        Ok(cover)
    }

    /// Set an image as cover of `target`, or of its own category when `target` is absent.
    pub async fn set_cover_for_image(
        &self,
        image_id: i64,
        target: Option<&str>,
    ) -> AdminResult<SectionCover> {
        let image = self.content.get_image(image_id).await?;
        let section = target
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&image.category);
        self.set_cover(&image.url, section).await
    }

    pub async fn set_hero_flags(&self, image_id: i64, flags: HeroFlags) -> AdminResult<Image> {
        Ok(self.content.update_hero_flags(image_id, flags).await?)
    }

    /// Best-effort object removal followed by an unconditional row delete.
    #[instrument(skip(self))]
    pub async fn delete_image(&self, image_id: i64) -> AdminResult<()> {
        let image = self.content.get_image(image_id).await?;

        match storage_path_from_url(&image.url, self.objects.bucket()) {
            Some(path) => {
                if let Err(err) = self.objects.remove(&path).await {
                    warn!(path = %path, error = %err, "could not remove stored object; deleting row anyway");
                }
            }
            None => warn!(url = %image.url, "image url is outside the bucket; skipping object removal"),
        }

        self.content.delete_image(image_id).await?;
        info!("image deleted");
        Ok(())
    }

    pub async fn delete_message(&self, message_id: i64) -> AdminResult<()> {
        self.content.delete_message(message_id).await?;
        info!(id = message_id, "message deleted");
        Ok(())
    }

    pub async fn add_testimonial(&self, testimonial: NewTestimonial) -> AdminResult<Testimonial> {
        let fields = [
            &testimonial.name,
            &testimonial.event,
            &testimonial.feedback,
            &testimonial.location,
        ];
        if fields.iter().any(|value| value.trim().is_empty()) {
            return Err(AdminError::Validation(
                "Name, event, feedback and location are required".into(),
            ));
        }
        Ok(self.content.insert_testimonial(&testimonial).await?)
    }

    pub async fn delete_testimonial(&self, testimonial_id: i64) -> AdminResult<()> {
        Ok(self.content.delete_testimonial(testimonial_id).await?)
    }
}
