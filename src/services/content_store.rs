//! src/services/content_store.rs
//!
//! ContentStore — the table-oriented data service behind the site. Four
//! collections live here: `messages`, `images`, `section_covers` and
//! `testimonials`. The trait is the client boundary; `SqliteContentStore`
//! is the shipped implementation backed by SQLite.
//!
//! Listings are ordered by `created_at` descending. Covers are written with an
//! upsert keyed on `section_id`, so a section never has more than one row and
//! the last successful write wins.

use crate::models::{
    image::{HeroFlags, Image, NewImage},
    message::{Message, NewMessage},
    section_cover::SectionCover,
    testimonial::{NewTestimonial, Testimonial},
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, SqlitePool, sqlite::Sqlite};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Schema applied on startup and by `--migrate`.
pub const MIGRATION_SQL: &str = include_str!("../../migrations/0001_init.sql");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{collection} row {id} not found")]
    NotFound { collection: &'static str, id: i64 },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Generic select/insert/upsert/delete surface over the site's collections.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All messages, newest first.
    async fn list_messages(&self) -> StoreResult<Vec<Message>>;

    /// Insert a message. A repeated `form_token` returns the row stored the
    /// first time instead of inserting again.
    async fn insert_message(&self, message: &NewMessage) -> StoreResult<Message>;

    async fn delete_message(&self, id: i64) -> StoreResult<()>;

    /// Images newest first, optionally filtered by exact category.
    async fn list_images(&self, category: Option<&str>) -> StoreResult<Vec<Image>>;

    async fn get_image(&self, id: i64) -> StoreResult<Image>;

    async fn insert_image(&self, image: &NewImage) -> StoreResult<Image>;

    async fn update_hero_flags(&self, id: i64, flags: HeroFlags) -> StoreResult<Image>;

    async fn delete_image(&self, id: i64) -> StoreResult<()>;

    async fn list_covers(&self) -> StoreResult<Vec<SectionCover>>;

    /// Replace-or-insert the cover for `cover.section_id`.
    async fn upsert_cover(&self, cover: &SectionCover) -> StoreResult<SectionCover>;

    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>>;

    async fn insert_testimonial(&self, testimonial: &NewTestimonial) -> StoreResult<Testimonial>;

    async fn delete_testimonial(&self, id: i64) -> StoreResult<()>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct SqliteContentStore {
    /// Shared SQLite connection pool.
    pub db: Arc<SqlitePool>,
}

const MESSAGE_COLUMNS: &str = "id, name, email, subject, message, created_at";
const IMAGE_COLUMNS: &str =
    "id, url, category, show_on_mobile_hero, show_on_desktop_hero, created_at";
const TESTIMONIAL_COLUMNS: &str = "id, name, event, feedback, location, created_at";

impl SqliteContentStore {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Apply the embedded schema statement by statement.
    pub async fn migrate(&self) -> StoreResult<()> {
        let statements = MIGRATION_SQL
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        debug!("running {} migration statements", statements.len());
        for stmt in statements {
            sqlx::query(stmt).execute(&*self.db).await?;
        }
        Ok(())
    }

    async fn delete_by_id(&self, collection: &'static str, id: i64) -> StoreResult<()> {
        let mut builder = QueryBuilder::<Sqlite>::new("DELETE FROM ");
        builder.push(collection);
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        let result = builder.build().execute(&*self.db).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { collection, id });
        }
        debug!(collection, id, "deleted row");
        Ok(())
    }
}

/// Map `RowNotFound` onto the collection-specific error.
fn not_found(collection: &'static str, id: i64) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |err| match err {
        sqlx::Error::RowNotFound => StoreError::NotFound { collection, id },
        other => StoreError::Sqlx(other),
    }
}

#[async_trait]
impl ContentStore for SqliteContentStore {
    async fn list_messages(&self) -> StoreResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, Message>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&*self.db)
        .await?;
        Ok(rows)
    }

    async fn insert_message(&self, message: &NewMessage) -> StoreResult<Message> {
        let token = message
            .form_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let inserted = sqlx::query_as::<_, Message>(&format!(
            "INSERT INTO messages (name, email, subject, message, submission_token, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(submission_token) DO NOTHING
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(token)
        .bind(Utc::now())
        .fetch_optional(&*self.db)
        .await?;

        match (inserted, token) {
            (Some(row), _) => Ok(row),
            (None, Some(token)) => {
                debug!(token, "duplicate contact submission ignored");
                let existing = sqlx::query_as::<_, Message>(&format!(
                    "SELECT {MESSAGE_COLUMNS} FROM messages WHERE submission_token = ?"
                ))
                .bind(token)
                .fetch_one(&*self.db)
                .await?;
                Ok(existing)
            }
            (None, None) => Err(StoreError::Sqlx(sqlx::Error::RowNotFound)),
        }
    }

    async fn delete_message(&self, id: i64) -> StoreResult<()> {
        self.delete_by_id("messages", id).await
    }

    async fn list_images(&self, category: Option<&str>) -> StoreResult<Vec<Image>> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT {IMAGE_COLUMNS} FROM images"));
        if let Some(category) = category {
            builder.push(" WHERE category = ");
            builder.push_bind(category);
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows: Vec<Image> = builder.build_query_as().fetch_all(&*self.db).await?;
        Ok(rows)
    }

    async fn get_image(&self, id: i64) -> StoreResult<Image> {
        sqlx::query_as::<_, Image>(&format!("SELECT {IMAGE_COLUMNS} FROM images WHERE id = ?"))
            .bind(id)
            .fetch_one(&*self.db)
            .await
            .map_err(not_found("images", id))
    }

    async fn insert_image(&self, image: &NewImage) -> StoreResult<Image> {
        let row = sqlx::query_as::<_, Image>(&format!(
            "INSERT INTO images (url, category, created_at) VALUES (?, ?, ?)
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(&image.url)
        .bind(&image.category)
        .bind(Utc::now())
        .fetch_one(&*self.db)
        .await?;
        Ok(row)
    }

    async fn update_hero_flags(&self, id: i64, flags: HeroFlags) -> StoreResult<Image> {
        sqlx::query_as::<_, Image>(&format!(
            "UPDATE images SET show_on_mobile_hero = ?, show_on_desktop_hero = ?
             WHERE id = ?
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(flags.show_on_mobile_hero)
        .bind(flags.show_on_desktop_hero)
        .bind(id)
        .fetch_one(&*self.db)
        .await
        .map_err(not_found("images", id))
    }

    async fn delete_image(&self, id: i64) -> StoreResult<()> {
        self.delete_by_id("images", id).await
    }

    async fn list_covers(&self) -> StoreResult<Vec<SectionCover>> {
        let rows = sqlx::query_as::<_, SectionCover>(
            "SELECT section_id, image_url FROM section_covers ORDER BY section_id",
        )
        .fetch_all(&*self.db)
        .await?;
        Ok(rows)
    }

    async fn upsert_cover(&self, cover: &SectionCover) -> StoreResult<SectionCover> {
        let row = sqlx::query_as::<_, SectionCover>(
            "INSERT INTO section_covers (section_id, image_url) VALUES (?, ?)
             ON CONFLICT(section_id) DO UPDATE SET image_url = excluded.image_url
             RETURNING section_id, image_url",
        )
        .bind(&cover.section_id)
        .bind(&cover.image_url)
        .fetch_one(&*self.db)
        .await?;
        Ok(row)
    }

    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        let rows = sqlx::query_as::<_, Testimonial>(&format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&*self.db)
        .await?;
        Ok(rows)
    }

    async fn insert_testimonial(&self, testimonial: &NewTestimonial) -> StoreResult<Testimonial> {
        let row = sqlx::query_as::<_, Testimonial>(&format!(
            "INSERT INTO testimonials (name, event, feedback, location, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {TESTIMONIAL_COLUMNS}"
        ))
        .bind(&testimonial.name)
        .bind(&testimonial.event)
        .bind(&testimonial.feedback)
        .bind(&testimonial.location)
        .bind(Utc::now())
        .fetch_one(&*self.db)
        .await?;
        Ok(row)
    }

    async fn delete_testimonial(&self, id: i64) -> StoreResult<()> {
        self.delete_by_id("testimonials", id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        let value = sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&*self.db)
            .await?;
        if value != 1 {
            return Err(StoreError::Sqlx(sqlx::Error::Protocol(format!(
                "unexpected ping result {value}"
            ))));
        }
        Ok(())
    }
}
