//! Slide-index state for the hero and testimonial carousels.
//!
//! The server renders the initial state and the page script mirrors the same
//! transitions in the browser: a timer tick advances unless the pointer hovers
//! or a touch is in progress, prev/next wrap around, and a direct selection
//! jumps to a slide.

use std::time::Duration;

/// Autoplay interval for the hero slideshow.
pub const HERO_INTERVAL: Duration = Duration::from_secs(5);

/// Autoplay interval for the testimonials carousel.
pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_secs(5);

/// Index into a list of `len` slides plus the pause flags.
///
/// For `len >= 1` the index is always in `0..len`. With no slides every
/// transition is a no-op and the index stays 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
    hovered: bool,
    touched: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Autoplay is suspended while hovered or touched.
    pub fn is_paused(&self) -> bool {
        self.hovered || self.touched
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Timer tick. Returns whether the carousel advanced.
    pub fn tick(&mut self) -> bool {
        if self.is_paused() || self.len < 2 {
            return false;
        }
        self.next();
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_touched(&mut self, touched: bool) {
        self.touched = touched;
    }

    /// The slide list changed size; fall back to the first slide if the
    /// current one no longer exists.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}
