use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Client feedback shown in the testimonials carousel.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    /// Kind of shoot, e.g. "Wedding Photography".
    pub event: String,
    pub feedback: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct NewTestimonial {
    pub name: String,
    pub event: String,
    pub feedback: String,
    pub location: String,
}
