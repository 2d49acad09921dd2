// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Button labels, boundary notices and the window title are resolved
//! through Fluent bundles. Artwork titles and artists are shown as given.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Bundled `.ftl` files plus an optional override directory
//! - Runtime language switching
//! - `MISSING: <key>` marker for untranslated messages

pub mod fluent;
