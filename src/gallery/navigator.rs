// SPDX-License-Identifier: MPL-2.0
//! Position tracking over a [`Gallery`].
//!
//! The navigator clamps at both ends of the gallery instead of wrapping
//! around. A rejected step leaves the position untouched and is reported as
//! [`Navigation::Blocked`] so the caller can show a boundary notice.

use super::{ArtworkRecord, Gallery};
use tracing::debug;

/// Edge of the gallery a rejected step ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Tried to retreat from the first artwork.
    First,
    /// Tried to advance from the last artwork.
    Last,
}

/// Outcome of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The position changed.
    Moved { from: usize, to: usize },
    /// The step was rejected at a boundary; the position is unchanged.
    Blocked(Boundary),
}

impl Navigation {
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// Snapshot of the navigation state for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Current position (0-indexed).
    pub current_index: usize,
    /// Total number of artworks.
    pub total: usize,
    /// Whether the current artwork is the first one.
    pub at_first: bool,
    /// Whether the current artwork is the last one.
    pub at_last: bool,
}

/// Owns the current position over a borrowed, read-only [`Gallery`].
#[derive(Debug, Clone)]
pub struct Navigator<'g> {
    gallery: &'g Gallery,
    current_index: usize,
}

impl<'g> Navigator<'g> {
    /// Creates a navigator positioned on the first artwork.
    #[must_use]
    pub fn new(gallery: &'g Gallery) -> Self {
        Self {
            gallery,
            current_index: 0,
        }
    }

    /// The artwork at the current position.
    #[must_use]
    pub fn current(&self) -> &'g ArtworkRecord {
        &self.gallery[self.current_index]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn gallery(&self) -> &'g Gallery {
        self.gallery
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.current_index == self.gallery.last_index()
    }

    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            current_index: self.current_index,
            total: self.gallery.len(),
            at_first: self.is_at_first(),
            at_last: self.is_at_last(),
        }
    }

    /// Moves to the next artwork unless already on the last one.
    pub fn advance(&mut self) -> Navigation {
        if self.is_at_last() {
            debug!(index = self.current_index, "advance blocked at last artwork");
            return Navigation::Blocked(Boundary::Last);
        }
        self.step_to(self.current_index + 1)
    }

    /// Moves to the previous artwork unless already on the first one.
    pub fn retreat(&mut self) -> Navigation {
        if self.is_at_first() {
            debug!("retreat blocked at first artwork");
            return Navigation::Blocked(Boundary::First);
        }
        self.step_to(self.current_index - 1)
    }

    /// Like [`advance`](Self::advance), then hands the outcome and the
    /// resulting state to `observer`.
    pub fn advance_with<F>(&mut self, observer: F) -> Navigation
    where
        F: FnOnce(Navigation, NavigationInfo),
    {
        let outcome = self.advance();
        observer(outcome, self.info());
        outcome
    }

    /// Like [`retreat`](Self::retreat), then hands the outcome and the
    /// resulting state to `observer`.
    pub fn retreat_with<F>(&mut self, observer: F) -> Navigation
    where
        F: FnOnce(Navigation, NavigationInfo),
    {
        let outcome = self.retreat();
        observer(outcome, self.info());
        outcome
    }

    fn step_to(&mut self, to: usize) -> Navigation {
        let from = self.current_index;
        self.current_index = to;
        debug!(from, to, "navigated");
        Navigation::Moved { from, to }
    }
}
