// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the first built-in artwork at runtime to produce an RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::gallery;
use iced::window::{icon, Icon};

const ICON_SIZE: u32 = 128;

/// Rasterize the icon artwork to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let artwork = gallery::builtin()[0].image();
    let (width, height, pixels) = artwork.rasterize(ICON_SIZE).ok()?;
    icon::from_rgba(pixels, width, height).ok()
}
