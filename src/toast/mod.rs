// SPDX-License-Identifier: MPL-2.0
//! Queued, animated toast banners.
//!
//! A toast is a banner pinned to the top edge of the window. It slides in,
//! stays for a deadline (or until tapped), slides out, and hands over to the
//! next queued toast.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` builder and completion callbacks
//! - [`style`] - `ToastStyle` value type and presets
//! - [`layout`] - Banner height computation from text measurement
//! - [`scheduler`] - `Toaster`, the show/queue/hide state machine
//! - [`timeline`] - Cancellable deferred events
//! - [`defaults`] - Default timings and banner metrics
//! - [`surface`] - Platform contracts the scheduler drives
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{Settings, Toaster, ToastStyle};
//! use iced_toast::ui::design_tokens::DesignTokens;
//!
//! let mut toaster = Toaster::new(platform, Settings::default());
//! let style = ToastStyle::mars(&DesignTokens);
//!
//! toaster.show(toaster.settings().request("Image saved", style).with_title("MARS"));
//!
//! // From the event loop while `has_pending_work()`:
//! toaster.tick();
//! ```

pub mod defaults;
pub mod layout;
pub mod request;
pub mod resources;
pub mod scheduler;
pub mod style;
pub mod surface;
pub mod timeline;
mod timing;

pub use layout::{Content, Heights, Insets, Metrics, ScreenGeometry, TextMeasure};
pub use request::{Completion, RequestId, ToastRequest};
pub use resources::{FontRole, NamedColor, ResourceResolver};
pub use scheduler::{Message, Phase, Settings, Toaster};
pub use style::{FontSpec, ImageAlignment, LineLimit, StylePreset, TextAlignment, ToastStyle};
pub use surface::{Clock, Platform, PresentationSurface, SystemClock};
pub use timeline::{TimerHandle, Timeline};
pub use timing::{AnimationDuration, Deadline};
