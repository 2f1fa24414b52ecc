//! The fixed set of page sections that can carry a cover image.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A page section that can be assigned a cover.
///
/// Gallery categories double as section ids: the id of a gallery section is the
/// same text that images are uploaded under, e.g. `"Baby Shower"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SectionId {
    Hero,
    About,
    Wedding,
    BabyShower,
    PubertyCeremony,
    Portrait,
    Commercial,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Wedding,
        SectionId::BabyShower,
        SectionId::PubertyCeremony,
        SectionId::Portrait,
        SectionId::Commercial,
    ];

    /// Gallery sections in display order.
    pub const GALLERY: [SectionId; 5] = [
        SectionId::Wedding,
        SectionId::BabyShower,
        SectionId::PubertyCeremony,
        SectionId::Portrait,
        SectionId::Commercial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Wedding => "Wedding",
            SectionId::BabyShower => "Baby Shower",
            SectionId::PubertyCeremony => "Puberty Ceremony",
            SectionId::Portrait => "Portrait",
            SectionId::Commercial => "Commercial",
        }
    }

    pub fn is_gallery(self) -> bool {
        !matches!(self, SectionId::Hero | SectionId::About)
    }

    /// Heading used for the section's gallery page and grid tile.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Hero => "Hero",
            SectionId::About => "Behind the Lens",
            SectionId::Wedding => "Wedding Photography",
            SectionId::BabyShower => "Baby Shower",
            SectionId::PubertyCeremony => "Puberty Ceremony",
            SectionId::Portrait => "Portrait Sessions",
            SectionId::Commercial => "Commercial Shoots",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            SectionId::Hero => "",
            SectionId::About => "Capturing raw, unfiltered emotion",
            SectionId::Wedding => "Capturing the magic of your special day",
            SectionId::BabyShower => "Celebrating new beginnings beautifully",
            SectionId::PubertyCeremony => "Traditional ceremonies with modern elegance",
            SectionId::Portrait => "Timeless portraits with character",
            SectionId::Commercial => "Elevating your brand image",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

impl TryFrom<String> for SectionId {
    type Error = UnknownSection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.as_str().to_string()
    }
}
