// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`viewer`] - Artwork image, caption and navigation row
//! - [`controls`] - Previous/next buttons and their label selection
//! - [`notifications`] - Toast notification system for boundary notices and warnings
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod controls;
pub mod design_tokens;
pub mod notifications;
pub mod theming;
pub mod viewer;
