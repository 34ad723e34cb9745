// SPDX-License-Identifier: MPL-2.0
//! Desktop platform backing a [`Toaster`](crate::toast::Toaster) in an Iced window.

use super::measure::EstimatedMeasure;
use super::surface::BannerSurface;
use crate::toast::{
    Clock, FontSpec, Insets, LineLimit, Platform, ScreenGeometry, SystemClock, TextAlignment,
    TextMeasure,
};
use iced::Size;
use std::time::Instant;

/// Window geometry, text estimation and clock for desktop toasts.
///
/// Until a window size is known there is nothing to attach a banner to, and
/// [`Platform::open_surface`] returns `None`.
#[derive(Debug, Clone)]
pub struct DesktopPlatform<C = SystemClock> {
    window: Option<Size>,
    insets: Insets,
    measure: EstimatedMeasure,
    clock: C,
}

impl DesktopPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DesktopPlatform<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            window: None,
            insets: Insets::default(),
            measure: EstimatedMeasure::default(),
            clock,
        }
    }

    pub fn set_window_size(&mut self, size: Size) {
        self.window = Some(size);
    }

    /// Forgets the window, e.g. once it has been closed.
    pub fn clear_window(&mut self) {
        self.window = None;
    }

    pub fn set_safe_area_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    #[must_use]
    pub fn window_size(&self) -> Option<Size> {
        self.window
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> TextMeasure for DesktopPlatform<C> {
    fn measure(
        &self,
        text: &str,
        line_limit: LineLimit,
        alignment: TextAlignment,
        font: &FontSpec,
        max_width: f32,
    ) -> f32 {
        self.measure.measure(text, line_limit, alignment, font, max_width)
    }
}

impl<C: Clock> ScreenGeometry for DesktopPlatform<C> {
    fn screen_size(&self) -> Size {
        self.window.unwrap_or(Size::ZERO)
    }

    fn safe_area_insets(&self) -> Insets {
        self.insets
    }
}

impl<C: Clock> Clock for DesktopPlatform<C> {
    fn now(&self) -> Instant {
        self.clock.now()
    }
}

impl<C: Clock> Platform for DesktopPlatform<C> {
    type Surface = BannerSurface;

    fn open_surface(&mut self) -> Option<BannerSurface> {
        self.window.map(|_| BannerSurface::new(self.clock.now()))
    }
}
