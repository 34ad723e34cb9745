// SPDX-License-Identifier: MPL-2.0
//! Collaborator contracts the scheduler drives.

use super::layout::{ScreenGeometry, TextMeasure};
use iced::Rectangle;
use std::time::{Duration, Instant};

/// The overlay a toast is drawn on.
///
/// Exclusively owned by the scheduler, which is the only component that
/// creates, moves and disposes it.
pub trait PresentationSurface {
    /// Places the surface at `frame` immediately, cancelling any animation.
    fn prepare(&mut self, frame: Rectangle);

    /// Starts moving the surface to `frame` over `duration`.
    ///
    /// The scheduler tracks completion itself, `duration` after `started`.
    fn animate_to(&mut self, frame: Rectangle, duration: Duration, started: Instant);

    /// Hides or reveals the surface without animation.
    fn set_hidden(&mut self, hidden: bool);

    /// Releases the surface. It is never used again afterwards.
    fn dispose(&mut self);
}

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Everything platform-specific a [`Toaster`](super::Toaster) needs.
pub trait Platform: TextMeasure + ScreenGeometry + Clock {
    type Surface: PresentationSurface;

    /// Creates the overlay surface, or `None` when there is no host window
    /// to attach it to.
    fn open_surface(&mut self) -> Option<Self::Surface>;
}
