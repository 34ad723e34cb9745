// SPDX-License-Identifier: MPL-2.0
//! Show requests submitted to the scheduler.

use super::layout::Content;
use super::style::ToastStyle;
use super::timing::{AnimationDuration, Deadline};
use iced::widget::image::Handle;
use std::fmt;

/// Unique identifier for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Creates a new unique request ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Called with `true` once the toast has slid in and with `false` once it
/// has slid out.
pub type Completion = Box<dyn FnMut(bool)>;

/// One requested toast.
pub struct ToastRequest {
    id: RequestId,
    title: Option<String>,
    message: String,
    image: Option<Handle>,
    style: ToastStyle,
    duration: AnimationDuration,
    deadline: Deadline,
    completion: Option<Completion>,
}

impl ToastRequest {
    /// Creates a request for `message` with the given style and default
    /// timings.
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            id: RequestId::new(),
            title: None,
            message: message.into(),
            image: None,
            style,
            duration: AnimationDuration::default(),
            deadline: Deadline::default(),
            completion: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: Handle) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: AnimationDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the auto-dismiss deadline. [`Deadline::STICKY`] disables it.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    #[must_use]
    pub fn on_complete(mut self, completion: impl FnMut(bool) + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }

    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn image(&self) -> Option<&Handle> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn style(&self) -> &ToastStyle {
        &self.style
    }

    #[must_use]
    pub fn duration(&self) -> AnimationDuration {
        self.duration
    }

    #[must_use]
    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    #[must_use]
    pub fn content(&self) -> Content<'_> {
        Content {
            title: self.title(),
            message: &self.message,
            has_image: self.image.is_some(),
        }
    }

    pub(crate) fn complete(&mut self, shown: bool) {
        if let Some(completion) = self.completion.as_mut() {
            completion(shown);
        }
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("has_image", &self.image.is_some())
            .field("duration", &self.duration)
            .field("deadline", &self.deadline)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}
