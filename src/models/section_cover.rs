//! Cover assignments for page sections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The image currently shown as a section's cover.
///
/// `image_url` is a copy of the image's URL, not a reference to its row, so a
/// cover keeps pointing at the URL after the image itself is deleted.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq, Eq)]
pub struct SectionCover {
    /// One of the known section ids; primary key.
    pub section_id: String,

    pub image_url: String,
}
