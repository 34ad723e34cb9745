// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Toaster`] shows one toast at a time. Requests arriving while a toast
//! is on screen wait in a FIFO queue and are presented one by one, each after
//! the previous toast has slid out and a short settle delay has elapsed.
//!
//! ```text
//! Idle --show--> Entering --slid in--> Visible --dismiss/timer--> Leaving --slid out--> Idle
//!                    \_____________________dismiss______________________/
//! ```
//!
//! Animation completions, the auto-dismiss timer and the settle delay are
//! deferred events on an internal [`Timeline`]; the host drives them by
//! calling [`Toaster::tick`] from its event loop.

use super::defaults::DEFAULT_SETTLE_DELAY_MS;
use super::layout::{banner_frame, compute_heights, Heights, Metrics, ScreenGeometry};
use super::request::ToastRequest;
use super::style::ToastStyle;
use super::surface::{Clock, Platform, PresentationSurface};
use super::timeline::{TimerHandle, Timeline};
use super::timing::{AnimationDuration, Deadline};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Messages a UI event loop forwards to the toaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Run deferred events that are due.
    Tick,
    /// The user tapped or swiped the banner away.
    Dismiss,
    /// The window started changing size or orientation.
    TransitionStarted,
    /// The window finished changing size or orientation.
    TransitionFinished,
}

/// Where the visible toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Sliding on screen.
    Entering,
    /// Resting on screen, auto-dismiss timer armed if any.
    Visible,
    /// Sliding off screen.
    Leaving,
}

/// Scheduler-wide timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Default slide duration for requests built through [`Settings::request`].
    pub animation_duration: AnimationDuration,
    /// Default deadline for requests built through [`Settings::request`].
    pub deadline: Deadline,
    /// Pause between a toast leaving and the next one entering.
    pub settle_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animation_duration: AnimationDuration::default(),
            deadline: Deadline::default(),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

impl Settings {
    /// Builds a request carrying these default timings.
    pub fn request(&self, message: impl Into<String>, style: ToastStyle) -> ToastRequest {
        ToastRequest::new(message, style)
            .with_duration(self.animation_duration)
            .with_deadline(self.deadline)
    }
}

#[derive(Debug)]
enum Deferred {
    Entered,
    AutoDismiss,
    Left,
    /// A dequeued request waiting out the settle delay.
    Present(ToastRequest),
}

/// Presents toasts one at a time on a platform surface.
pub struct Toaster<P: Platform> {
    platform: P,
    settings: Settings,
    metrics: Metrics,
    phase: Phase,
    current: Option<ToastRequest>,
    heights: Heights,
    queue: VecDeque<ToastRequest>,
    timeline: Timeline<Deferred>,
    hide_timer: Option<TimerHandle>,
    animation: Option<TimerHandle>,
    settling: Option<TimerHandle>,
    surface: Option<P::Surface>,
}

impl<P: Platform> fmt::Debug for Toaster<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toaster")
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("queued", &self.queue.len())
            .field("has_surface", &self.surface.is_some())
            .finish()
    }
}

impl<P: Platform> Toaster<P> {
    #[must_use]
    pub fn new(platform: P, settings: Settings) -> Self {
        Self::with_metrics(platform, settings, Metrics::default())
    }

    #[must_use]
    pub fn with_metrics(platform: P, settings: Settings, metrics: Metrics) -> Self {
        Self {
            platform,
            settings,
            metrics,
            phase: Phase::Idle,
            current: None,
            heights: Heights::default(),
            queue: VecDeque::new(),
            timeline: Timeline::new(),
            hide_timer: None,
            animation: None,
            settling: None,
            surface: None,
        }
    }

    /// Shows `request` now, or queues it behind the toast on screen.
    ///
    /// When no surface can be opened the request is dropped silently and its
    /// completion never runs.
    pub fn show(&mut self, request: ToastRequest) {
        if self.is_showing() {
            self.queue.push_back(request);
            tracing::debug!(queued = self.queue.len(), "toast busy, request queued");
            return;
        }
        self.present(request);
    }

    /// Dismisses the toast on screen, as a tap or upward swipe would.
    pub fn dismiss(&mut self) {
        self.hide();
    }

    /// Drops every request that has not been shown yet, without running
    /// their completions. The toast on screen is untouched.
    pub fn cancel_next_toasts(&mut self) {
        let mut dropped = self.queue.len();
        self.queue.clear();
        if let Some(handle) = self.settling.take() {
            if self.timeline.cancel(handle) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::debug!(dropped, "pending toasts cancelled");
        }
    }

    /// Removes the current toast immediately, without animation, and drops
    /// the queue. No completion runs for the toast that was on screen.
    pub fn cancel_all_toasts(&mut self) {
        self.cancel_next_toasts();
        self.cancel_hide_timer();
        if let Some(handle) = self.animation.take() {
            self.timeline.cancel(handle);
        }
        if let Some(request) = self.current.take() {
            tracing::debug!(request = %request.id(), "toast cancelled");
        }
        self.phase = Phase::Idle;
        self.heights = Heights::default();
        self.release_surface();
    }

    /// Tears the toaster down: cancels everything and releases the surface.
    pub fn dispose(&mut self) {
        self.cancel_all_toasts();
        self.timeline.clear();
    }

    /// Hides the surface while the window is being resized or rotated.
    pub fn begin_transition(&mut self) {
        if !self.is_showing() {
            return;
        }
        let frame = banner_frame(self.heights.total, self.platform.screen_size().width, true);
        if let Some(surface) = self.surface.as_mut() {
            surface.set_hidden(true);
            surface.prepare(frame);
        }
    }

    /// Lays the toast out again for the new geometry and slides it back in.
    ///
    /// Phase and queue are left as they are.
    pub fn end_transition(&mut self) {
        let Some(request) = self.current.as_ref() else {
            return;
        };
        self.heights = compute_heights(
            request.content(),
            request.style(),
            &self.metrics,
            &self.platform,
            &self.platform,
        );
        if self.phase == Phase::Leaving {
            return;
        }

        let duration = request.duration().as_duration();
        let frame = banner_frame(self.heights.total, self.platform.screen_size().width, false);
        let now = self.platform.now();
        if let Some(surface) = self.surface.as_mut() {
            surface.set_hidden(false);
            surface.animate_to(frame, duration, now);
        }
    }

    /// Runs every deferred event due at the platform's current instant.
    pub fn tick(&mut self) {
        let now = self.platform.now();
        while let Some(event) = self.timeline.pop_due(now) {
            match event {
                Deferred::Entered => self.on_entered(),
                Deferred::AutoDismiss => {
                    self.hide_timer = None;
                    self.hide();
                }
                Deferred::Left => self.on_left(),
                Deferred::Present(request) => {
                    self.settling = None;
                    if self.is_showing() {
                        // Shown ahead of us during the settle delay; keep our turn.
                        self.queue.push_front(request);
                    } else {
                        self.present(request);
                    }
                }
            }
        }
    }

    /// Handles a UI message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick => self.tick(),
            Message::Dismiss => self.dismiss(),
            Message::TransitionStarted => self.begin_transition(),
            Message::TransitionFinished => self.end_transition(),
        }
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The request on screen.
    #[must_use]
    pub fn current(&self) -> Option<&ToastRequest> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn current_style(&self) -> Option<&ToastStyle> {
        self.current.as_ref().map(ToastRequest::style)
    }

    #[must_use]
    pub fn heights(&self) -> Heights {
        self.heights
    }

    #[must_use]
    pub fn current_height(&self) -> f32 {
        self.heights.total
    }

    #[must_use]
    pub fn title_height(&self) -> f32 {
        self.heights.title
    }

    #[must_use]
    pub fn message_height(&self) -> f32 {
        self.heights.message
    }

    /// Number of requests waiting, including one in its settle delay.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len() + usize::from(self.settling.is_some())
    }

    /// Instant of the next deferred event, for hosts that sleep until then.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timeline.next_due()
    }

    /// Whether an animation, timer or settle delay is pending.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.timeline.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn surface(&self) -> Option<&P::Surface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    fn present(&mut self, request: ToastRequest) {
        if self.surface.is_none() {
            self.surface = self.platform.open_surface();
        }
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!(request = %request.id(), "no surface available, toast dropped");
            return;
        };

        let heights = compute_heights(
            request.content(),
            request.style(),
            &self.metrics,
            &self.platform,
            &self.platform,
        );
        let width = self.platform.screen_size().width;
        let duration = request.duration().as_duration();
        let now = self.platform.now();

        surface.prepare(banner_frame(heights.total, width, true));
        surface.set_hidden(false);
        surface.animate_to(banner_frame(heights.total, width, false), duration, now);

        tracing::debug!(
            request = %request.id(),
            height = heights.total,
            "toast entering"
        );
        self.heights = heights;
        self.current = Some(request);
        self.phase = Phase::Entering;
        self.animation = self.timeline.schedule_after(now, duration, Deferred::Entered);
    }

    fn on_entered(&mut self) {
        self.animation = None;
        if self.phase != Phase::Entering {
            return;
        }
        self.phase = Phase::Visible;

        let Some(deadline) = self.current.as_ref().map(ToastRequest::deadline) else {
            return;
        };
        self.arm_hide_timer(deadline);
        if let Some(request) = self.current.as_mut() {
            request.complete(true);
        }
    }

    fn arm_hide_timer(&mut self, deadline: Deadline) {
        self.cancel_hide_timer();
        if deadline.is_sticky() {
            return;
        }
        let now = self.platform.now();
        self.hide_timer = self
            .timeline
            .schedule_after(now, deadline.as_duration(), Deferred::AutoDismiss);
    }

    fn cancel_hide_timer(&mut self) {
        if let Some(handle) = self.hide_timer.take() {
            self.timeline.cancel(handle);
        }
    }

    fn hide(&mut self) {
        if !matches!(self.phase, Phase::Entering | Phase::Visible) {
            return;
        }
        let Some(duration) = self
            .current
            .as_ref()
            .map(|request| request.duration().as_duration())
        else {
            return;
        };

        self.cancel_hide_timer();
        if let Some(handle) = self.animation.take() {
            // Dismissed while sliding in: the "shown" completion never runs.
            self.timeline.cancel(handle);
        }

        let frame = banner_frame(self.heights.total, self.platform.screen_size().width, true);
        let now = self.platform.now();
        if let Some(surface) = self.surface.as_mut() {
            surface.animate_to(frame, duration, now);
        }

        tracing::debug!("toast leaving");
        self.phase = Phase::Leaving;
        self.animation = self.timeline.schedule_after(now, duration, Deferred::Left);
    }

    fn on_left(&mut self) {
        self.animation = None;
        if self.phase != Phase::Leaving {
            return;
        }
        self.phase = Phase::Idle;
        self.heights = Heights::default();

        if let Some(mut request) = self.current.take() {
            request.complete(false);
        }
        self.release_surface();
        self.schedule_next();
    }

    fn schedule_next(&mut self) {
        let Some(next) = self.queue.pop_front() else {
            return;
        };
        let now = self.platform.now();
        tracing::trace!(request = %next.id(), remaining = self.queue.len(), "next toast settling");
        self.settling = self
            .timeline
            .schedule_after(now, self.settings.settle_delay, Deferred::Present(next));
    }

    fn release_surface(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.dispose();
        }
    }
}
