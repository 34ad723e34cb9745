// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Creates the frame tick subscription while a toast is on screen or a
/// deferred toast event is pending.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Reports window size changes so banners can be re-laid out.
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
