//! Records exchanged with the content store.
//!
//! Rows are owned by the store; this service only sends and receives them.
//! Each maps to a table via `sqlx::FromRow` and serializes as JSON via `serde`.

pub mod image;
pub mod message;
pub mod section;
pub mod section_cover;
pub mod testimonial;

