// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows queued, animated toast banners at the top of an Iced
//! window.
//!
//! The [`toast`] module holds the platform-independent scheduler and layout;
//! [`ui`] renders it with Iced, and [`app`] is a small demo built on both.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;
