// SPDX-License-Identifier: MPL-2.0
//! Timing domain types for toast presentation.
//!
//! Both newtypes carry exactly what the caller asked for. Values read from
//! the settings file are bounded before they get here.

use super::defaults::{DEFAULT_ANIMATION_DURATION_MS, DEFAULT_DEADLINE_SECS};
use std::time::Duration;

/// Duration of the slide-in and slide-out animations.
///
/// # Example
///
/// ```
/// use iced_toast::toast::AnimationDuration;
///
/// let duration = AnimationDuration::from_millis(250);
/// assert_eq!(duration.as_duration().as_millis(), 250);
///
/// let slow = AnimationDuration::from_millis(60_000);
/// assert_eq!(slow.as_duration().as_secs(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnimationDuration(Duration);

impl AnimationDuration {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS))
    }
}

/// Auto-dismiss deadline measured from the end of the slide-in animation.
///
/// A zero deadline is *sticky*: the toast stays until it is dismissed by the
/// user or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(Duration);

impl Deadline {
    /// Never auto-dismiss.
    pub const STICKY: Self = Self(Duration::ZERO);

    /// Creates a deadline from fractional seconds.
    ///
    /// Zero, negative and non-finite values are [`Deadline::STICKY`]. Any
    /// positive value keeps at least one nanosecond so it still fires;
    /// values beyond [`Duration::MAX`] saturate.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self::STICKY;
        }
        let duration = Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX);
        Self(duration.max(Duration::from_nanos(1)))
    }

    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub fn is_sticky(self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self(Duration::from_secs_f64(DEFAULT_DEADLINE_SECS))
    }
}
