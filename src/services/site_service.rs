//! src/services/site_service.rs
//!
//! SiteService — read paths for the public pages plus the contact form's single
//! write. Read failures are logged and degrade to built-in defaults or an empty
//! state so one failing collection never takes the page down.

use crate::{
    models::{
        image::Image,
        message::{Message, NewMessage},
        section::SectionId,
        testimonial::Testimonial,
    },
    services::{
        admin_service::cover_map,
        content_store::{ContentStore, StoreError},
    },
    views::content::{DEFAULT_ABOUT_IMAGE, DEFAULT_HERO_SLIDES, DEFAULT_TESTIMONIALS},
};
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone)]
pub struct GalleryTile {
    pub section: SectionId,
    /// The section's cover, if one is set.
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialCard {
    pub name: String,
    pub event: String,
    pub feedback: String,
    pub location: String,
}

impl From<Testimonial> for TestimonialCard {
    fn from(t: Testimonial) -> Self {
        Self {
            name: t.name,
            event: t.event,
            feedback: t.feedback,
            location: t.location,
        }
    }
}

/// Data behind the single-page marketing site.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub desktop_slides: Vec<Slide>,
    pub mobile_slides: Vec<Slide>,
    pub tiles: Vec<GalleryTile>,
    pub about_image: String,
    pub testimonials: Vec<TestimonialCard>,
}

#[derive(Debug, Clone)]
pub struct GalleryPage {
    /// Category exactly as requested (already percent-decoded).
    pub category: String,
    pub title: String,
    pub images: Vec<Image>,
    /// The listing could not be fetched; `images` is empty for that reason.
    pub unavailable: bool,
}

#[derive(Clone)]
pub struct SiteService {
    content: Arc<dyn ContentStore>,
}

fn default_slides() -> Vec<Slide> {
    DEFAULT_HERO_SLIDES
        .iter()
        .map(|(url, alt)| Slide {
            url: url.to_string(),
            alt: alt.to_string(),
        })
        .collect()
}

fn default_testimonials() -> Vec<TestimonialCard> {
    DEFAULT_TESTIMONIALS
        .iter()
        .map(|(name, event, feedback, location)| TestimonialCard {
            name: name.to_string(),
            event: event.to_string(),
            feedback: feedback.to_string(),
            location: location.to_string(),
        })
        .collect()
}

/// Hero slides for one breakpoint: flagged images, else the hero cover, else
/// the built-in slides.
pub fn hero_slides(
    images: &[Image],
    covers: &HashMap<String, String>,
    flag: impl Fn(&Image) -> Option<bool>,
) -> Vec<Slide> {
    let flagged: Vec<Slide> = images
        .iter()
        .filter(|image| flag(image) == Some(true))
        .map(|image| Slide {
            url: image.url.clone(),
            alt: image.category.clone(),
        })
        .collect();
    if !flagged.is_empty() {
        return flagged;
    }
    if let Some(url) = covers.get(SectionId::Hero.as_str()) {
        return vec![Slide {
            url: url.clone(),
            alt: "Featured photograph".into(),
        }];
    }
    default_slides()
}

/// Title for a gallery page; unknown categories are shown as-is.
pub fn gallery_title(category: &str) -> String {
    category
        .parse::<SectionId>()
        .map(|section| section.title().to_string())
        .unwrap_or_else(|_| category.to_string())
}

impl SiteService {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }

    pub async fn home(&self) -> HomePage {
        let images = self.content.list_images(None).await.unwrap_or_else(|err| {
            warn!(error = %err, "could not fetch images for hero");
            Vec::new()
        });
        let covers = match self.content.list_covers().await {
            Ok(rows) => cover_map(rows),
            Err(err) => {
                warn!(error = %err, "could not fetch section covers");
                HashMap::new()
            }
        };
        let testimonials = match self.content.list_testimonials().await {
            Ok(rows) if !rows.is_empty() => rows.into_iter().map(Into::into).collect(),
            Ok(_) => default_testimonials(),
            Err(err) => {
                warn!(error = %err, "could not fetch testimonials");
                default_testimonials()
            }
        };

        HomePage {
            desktop_slides: hero_slides(&images, &covers, |i| i.show_on_desktop_hero),
            mobile_slides: hero_slides(&images, &covers, |i| i.show_on_mobile_hero),
            tiles: SectionId::GALLERY
                .into_iter()
                .map(|section| GalleryTile {
                    section,
                    cover_url: covers.get(section.as_str()).cloned(),
                })
                .collect(),
            about_image: covers
                .get(SectionId::About.as_str())
                .cloned()
                .unwrap_or_else(|| DEFAULT_ABOUT_IMAGE.to_string()),
            testimonials,
        }
    }

    #[instrument(skip(self))]
    pub async fn gallery(&self, category: &str) -> GalleryPage {
        let (images, unavailable) = match self.content.list_images(Some(category)).await {
            Ok(images) => (images, false),
            Err(err) => {
                warn!(error = %err, "could not fetch gallery images");
                (Vec::new(), true)
            }
        };
        GalleryPage {
            category: category.to_string(),
            title: gallery_title(category),
            images,
            unavailable,
        }
    }

    /// Store one contact-form submission.
    #[instrument(skip(self, message), fields(subject = %message.subject))]
    pub async fn submit_contact(&self, message: NewMessage) -> Result<Message, SiteError> {
        let missing = message.missing_fields();
        if !missing.is_empty() {
            return Err(SiteError::MissingFields(missing));
        }
        let stored = self.content.insert_message(&message).await?;
        info!(id = stored.id, "contact message received");
        Ok(stored)
    }

    pub async fn images(&self, category: Option<&str>) -> Result<Vec<Image>, StoreError> {
        self.content.list_images(category).await
    }

    pub async fn covers(&self) -> Result<HashMap<String, String>, StoreError> {
        Ok(cover_map(self.content.list_covers().await?))
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        self.content.list_testimonials().await
    }
}
