// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Artwork Display Defaults
// ==========================================================================

/// Default edge length of the square artwork frame (logical pixels).
pub const DEFAULT_IMAGE_SIZE: u32 = 300;

/// Minimum artwork frame size.
pub const MIN_IMAGE_SIZE: u32 = 100;

/// Maximum artwork frame size.
pub const MAX_IMAGE_SIZE: u32 = 1000;

// ==========================================================================
// Boundary Notice Defaults
// ==========================================================================

/// How long a boundary notice stays on screen (milliseconds).
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 2000;

/// Minimum notice duration.
pub const MIN_NOTICE_DURATION_MS: u64 = 500;

/// Maximum notice duration.
pub const MAX_NOTICE_DURATION_MS: u64 = 10_000;

const _: () = {
    assert!(MIN_IMAGE_SIZE <= DEFAULT_IMAGE_SIZE && DEFAULT_IMAGE_SIZE <= MAX_IMAGE_SIZE);
    assert!(
        MIN_NOTICE_DURATION_MS <= DEFAULT_NOTICE_DURATION_MS
            && DEFAULT_NOTICE_DURATION_MS <= MAX_NOTICE_DURATION_MS
    );
};
