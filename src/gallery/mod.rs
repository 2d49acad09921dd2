// SPDX-License-Identifier: MPL-2.0
//! Gallery data model: artwork records and the fixed, ordered collection
//! that the viewer walks through.
//!
//! A [`Gallery`] is built once at startup and never mutated afterwards. It is
//! shared by reference with the [`Navigator`], which owns the only piece of
//! mutable state (the current position).
//!
//! # Examples
//!
//! ```
//! use art_space::gallery::{ArtworkRecord, Gallery, ImageRef, Navigator};
//!
//! let gallery = Gallery::new(vec![
//!     ArtworkRecord::new("Dawn", "Ana", ImageRef::embedded("a.svg")),
//!     ArtworkRecord::new("Dusk", "Ben", ImageRef::embedded("b.svg")),
//! ])
//! .expect("gallery is not empty");
//!
//! let mut navigator = Navigator::new(&gallery);
//! assert_eq!(navigator.current().title(), "Dawn");
//! navigator.advance();
//! assert_eq!(navigator.current().title(), "Dusk");
//! ```

pub mod artwork;
pub mod navigator;

pub use artwork::{ArtworkCache, ImageRef};
pub use navigator::{Boundary, Navigation, NavigationInfo, Navigator};

use std::fmt;
use std::sync::OnceLock;

/// A single artwork shown by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    title: String,
    artist: String,
    image: ImageRef,
}

impl ArtworkRecord {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, image: ImageRef) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            image,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Handle to the image resource backing this artwork.
    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

/// Errors raised while building a [`Gallery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// A gallery needs at least one artwork to have a valid current position.
    Empty,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Empty => write!(f, "gallery must contain at least one artwork"),
        }
    }
}

impl std::error::Error for GalleryError {}

/// Ordered, fixed-size and non-empty list of artworks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    records: Vec<ArtworkRecord>,
}

impl Gallery {
    /// Builds a gallery from `records`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] when `records` is empty.
    pub fn new(records: Vec<ArtworkRecord>) -> Result<Self, GalleryError> {
        if records.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self { records })
    }

    /// Number of artworks. Always at least 1.
    // A gallery can never be empty, so an `is_empty` would always return false.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Index of the last artwork.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.records.len() - 1
    }

}

impl std::ops::Index<usize> for Gallery {
    type Output = ArtworkRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

/// Returns the gallery compiled into the application.
///
/// Built on first access and shared read-only for the rest of the process.
pub fn builtin() -> &'static Gallery {
    static GALLERY: OnceLock<Gallery> = OnceLock::new();
    GALLERY.get_or_init(|| {
        Gallery::new(vec![
            ArtworkRecord::new("노동법", "카툰", ImageRef::embedded("a.svg")),
            ArtworkRecord::new("직장갑질", "사진", ImageRef::embedded("b.svg")),
            ArtworkRecord::new("박성웅", "프로필", ImageRef::embedded("c.svg")),
        ])
        .expect("built-in catalog is not empty")
    })
}
