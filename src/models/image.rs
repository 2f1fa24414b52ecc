//! An uploaded portfolio image.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata row for an image held in object storage.
///
/// `category` is free text. Nothing ties it to the known gallery sections, so an
/// image may carry a category that no gallery tab shows.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Image {
    /// Store-assigned identifier.
    pub id: i64,

    /// Public URL into object storage.
    pub url: String,

    /// Gallery label the image was uploaded under.
    pub category: String,

    /// Eligible as a hero slide on narrow screens. `None` means unset.
    pub show_on_mobile_hero: Option<bool>,

    /// Eligible as a hero slide on wide screens. `None` means unset.
    pub show_on_desktop_hero: Option<bool>,

    /// Store-assigned creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields recorded after a successful object upload.
#[derive(Clone, Debug)]
pub struct NewImage {
    pub url: String,
    pub category: String,
}

/// Hero eligibility flags, as toggled from the admin console.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroFlags {
    #[serde(default)]
    pub show_on_mobile_hero: bool,
    #[serde(default)]
    pub show_on_desktop_hero: bool,
}
