// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen artwork gallery built with the Iced GUI framework.
//!
//! The gallery state lives in [`gallery::Navigator`], a plain library type that
//! clamps at both ends of the list. The Iced application in [`app`] renders the
//! current artwork and feeds button presses back into it.

#![doc(html_root_url = "https://docs.rs/art_space/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod ui;

pub use app::config;
