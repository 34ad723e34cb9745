// SPDX-License-Identifier: MPL-2.0
//! Animated banner surface rendered by Iced.
//!
//! The surface only stores where the banner is heading; the view samples
//! [`BannerSurface::frame_at`] on every frame.

use crate::config::{IMAGE_BOUNCE_MIN_SCALE, IMAGE_BOUNCE_PERIOD_MS};
use crate::toast::PresentationSurface;
use iced::Rectangle;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Slide {
    from: Rectangle,
    to: Rectangle,
    started: Instant,
    duration: Duration,
}

impl Slide {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct BannerSurface {
    frame: Rectangle,
    slide: Option<Slide>,
    hidden: bool,
    disposed: bool,
    opened_at: Instant,
}

impl BannerSurface {
    #[must_use]
    pub fn new(opened_at: Instant) -> Self {
        Self {
            frame: Rectangle::default(),
            slide: None,
            hidden: true,
            disposed: false,
            opened_at,
        }
    }

    /// Frame of the banner at `now`, eased along the running slide.
    #[must_use]
    pub fn frame_at(&self, now: Instant) -> Rectangle {
        match &self.slide {
            Some(slide) => lerp(slide.from, slide.to, ease_in_out(slide.progress(now))),
            None => self.frame,
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.slide.is_some_and(|slide| slide.progress(now) < 1.0)
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Scale of a bouncing image at `now`.
    #[must_use]
    pub fn image_scale(&self, now: Instant) -> f32 {
        bounce_scale(now.saturating_duration_since(self.opened_at))
    }
}

impl PresentationSurface for BannerSurface {
    fn prepare(&mut self, frame: Rectangle) {
        self.frame = frame;
        self.slide = None;
    }

    fn animate_to(&mut self, frame: Rectangle, duration: Duration, started: Instant) {
        let from = self.frame_at(started);
        self.frame = frame;
        self.slide = Some(Slide {
            from,
            to: frame,
            started,
            duration,
        });
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.hidden = true;
        self.slide = None;
    }
}

/// Linear scale oscillating between 1.0 and the bounce minimum, reversing
/// every half period.
#[must_use]
pub fn bounce_scale(elapsed: Duration) -> f32 {
    let period = IMAGE_BOUNCE_PERIOD_MS as f32;
    let phase = (elapsed.as_millis() as f32 % (period * 2.0)) / period;
    let travel = if phase <= 1.0 { phase } else { 2.0 - phase };
    1.0 - (1.0 - IMAGE_BOUNCE_MIN_SCALE) * travel
}

fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    let mix = |a: f32, b: f32| a + (b - a) * t;
    Rectangle {
        x: mix(from.x, to.x),
        y: mix(from.y, to.y),
        width: mix(from.width, to.width),
        height: mix(from.height, to.height),
    }
}
