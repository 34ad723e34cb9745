// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::{Config, StylePreset};
use crate::toast;
use crate::ui::swipe::SwipeEvent;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Long single-sentence message with title and image, kept until tapped.
    ShowSingleLine,
    /// Title with a message spanning several explicit lines.
    ShowMultiLine,
    /// One-line message next to a bouncing image.
    ShowWithImage,
    /// Message only.
    ShowPlain,
    CancelNext,
    CancelAll,
    Toast(toast::Message),
    /// Pointer activity over the banner.
    Banner(SwipeEvent),
    Tick(Instant), // Drives animations and deferred toast events
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Settings already loaded by the launcher.
    pub config: Config,
    /// Overrides the style preset from the settings file.
    pub style: Option<StylePreset>,
}
