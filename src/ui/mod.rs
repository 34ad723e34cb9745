// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of toasts on a desktop window.
//!
//! - [`banner`] - Banner widget for the current toast
//! - [`swipe`] - Tap and swipe-up tracking over the banner
//! - [`surface`] - Animated surface the scheduler drives
//! - [`platform`] - Window geometry, clock and surfaces for the scheduler
//! - [`measure`] - Deterministic text height estimation
//! - [`design_tokens`] - Design system constants and the token resolver

pub mod banner;
pub mod design_tokens;
pub mod measure;
pub mod platform;
pub mod surface;
pub mod swipe;
