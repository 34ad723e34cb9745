// SPDX-License-Identifier: MPL-2.0
//! Demo application showing queued toasts in an Iced window.
//!
//! The `App` owns a single [`Toaster`] backed by the window. Buttons enqueue
//! the example toasts; a frame tick drives the slide animations and deferred
//! events while anything is on screen or pending. Tapping the banner or
//! swiping it up dismisses it.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::StylePreset;
use crate::toast::{self, Deadline, LineLimit, Settings, ToastRequest, ToastStyle, Toaster};
use crate::ui::design_tokens::{palette, DesignTokens};
use crate::ui::platform::DesktopPlatform;
use crate::ui::swipe::SwipeState;
use iced::widget::image::Handle;
use iced::{window, Element, Size, Subscription, Task};
use std::fmt;
use std::time::Instant;

const SINGLE_LINE_TEXT: &str = "Mars is the fourth planet from the Sun. The surface of Mars is \
orange-red because it is covered in iron oxide dust, giving it the nickname \"the Red Planet\".";

const MULTI_LINE_TEXT: &str = "Mars is the fourth planet from the Sun.
The surface of Mars is orange-red because
it is covered in iron oxide dust, giving it the
nickname \"the Red Planet\".";

const DEMO_IMAGE_SIDE: u32 = 64;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 280;

/// Root Iced application state.
pub struct App {
    toaster: Toaster<DesktopPlatform>,
    settings: Settings,
    preset: StylePreset,
    image: Handle,
    swipe: SwipeState,
    /// Timestamp of the last frame tick, used to sample animations.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toaster", &self.toaster)
            .field("preset", &self.preset)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = flags.config.toaster_settings();
        let preset = flags.style.or(flags.config.style).unwrap_or_default();

        let mut platform = DesktopPlatform::new();
        platform.set_window_size(default_window_size());

        tracing::info!(?preset, ?settings, "starting toast demo");

        let app = Self {
            toaster: Toaster::new(platform, settings),
            settings,
            preset,
            image: demo_image(DEMO_IMAGE_SIDE),
            swipe: SwipeState::default(),
            now: Instant::now(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.toaster.queued_count() {
            0 => "IcedToast".to_string(),
            queued => format!("IcedToast ({queued} queued)"),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            self.toaster.is_showing() || self.toaster.has_pending_work(),
        );
        let resize_sub = subscription::create_resize_subscription();

        Subscription::batch([tick_sub, resize_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowSingleLine => {
                let request = self
                    .request(SINGLE_LINE_TEXT, ToastStyle::mars(&DesignTokens))
                    .with_title("MARS")
                    .with_image(self.image.clone())
                    .with_deadline(Deadline::STICKY);
                self.show(request);
            }
            Message::ShowMultiLine => {
                let request = self
                    .request(MULTI_LINE_TEXT, self.preset_style())
                    .with_title("MARS");
                self.show(request);
            }
            Message::ShowWithImage => {
                let style = ToastStyle {
                    message_line_limit: LineLimit::new(1),
                    image_animation: true,
                    ..self.preset_style()
                };
                let request = self
                    .request(SINGLE_LINE_TEXT, style)
                    .with_image(self.image.clone());
                self.show(request);
            }
            Message::ShowPlain => {
                let request = self.request("Some message", self.preset_style());
                self.show(request);
            }
            Message::CancelNext => self.toaster.cancel_next_toasts(),
            Message::CancelAll => self.toaster.cancel_all_toasts(),
            Message::Toast(toast_message) => {
                self.now = Instant::now();
                self.toaster.handle_message(&toast_message);
            }
            Message::Banner(event) => {
                if self.swipe.update(event) {
                    self.now = Instant::now();
                    self.toaster.handle_message(&toast::Message::Dismiss);
                }
            }
            Message::Tick(now) => {
                self.now = now;
                self.toaster.tick();
            }
            Message::WindowResized(size) => {
                self.now = Instant::now();
                self.toaster.begin_transition();
                self.toaster.platform_mut().set_window_size(size);
                self.toaster.end_transition();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toaster: &self.toaster,
            now: self.now,
        })
    }

    fn preset_style(&self) -> ToastStyle {
        ToastStyle::preset(self.preset, &DesignTokens)
    }

    fn request(&self, message: &str, style: ToastStyle) -> ToastRequest {
        self.settings.request(message, style)
    }

    fn show(&mut self, request: ToastRequest) {
        let id = request.id();
        self.now = Instant::now();
        self.toaster.show(request.on_complete(move |shown| {
            tracing::info!(request = %id, shown, "toast completed");
        }));
    }
}

/// Tomato-colored disk on a transparent background.
fn demo_image(side: u32) -> Handle {
    Handle::from_rgba(side, side, demo_pixels(side))
}

/// RGBA rows of the demo disk.
fn demo_pixels(side: u32) -> Vec<u8> {
    let color = palette::TOMATO.into_rgba8();
    let center = side as f32 / 2.0;
    let radius_sq = center * center;

    let mut pixels = Vec::with_capacity((side * side * 4) as usize);
    for y in 0..side {
        for x in 0..side {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if dx * dx + dy * dy <= radius_sq {
                pixels.extend_from_slice(&color);
            } else {
                pixels.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Phase;
    use crate::ui::swipe::SwipeEvent;
    use iced::Point;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn new_app_uses_config_preset_unless_overridden() {
        let app = app();
        assert_eq!(app.preset, StylePreset::Space);

        let flags = Flags {
            style: Some(StylePreset::Mars),
            ..Flags::default()
        };
        assert_eq!(App::new(flags).0.preset, StylePreset::Mars);
    }

    #[test]
    fn show_buttons_enqueue_behind_current_toast() {
        let mut app = app();
        let _ = app.update(Message::ShowPlain);
        assert_eq!(app.toaster.phase(), Phase::Entering);

        let _ = app.update(Message::ShowMultiLine);
        let _ = app.update(Message::ShowWithImage);
        assert_eq!(app.toaster.queued_count(), 2);
        assert!(app.title().contains("2 queued"));

        let _ = app.update(Message::CancelNext);
        assert_eq!(app.toaster.queued_count(), 0);

        let _ = app.update(Message::CancelAll);
        assert!(!app.toaster.is_showing());
    }

    #[test]
    fn dismiss_message_starts_leaving() {
        let mut app = app();
        let _ = app.update(Message::ShowSingleLine);
        let _ = app.update(Message::Toast(crate::toast::Message::Dismiss));
        assert_eq!(app.toaster.phase(), Phase::Leaving);
    }

    #[test]
    fn resize_updates_platform_geometry() {
        let mut app = app();
        let _ = app.update(Message::ShowPlain);
        let before = app.toaster.current_height();

        let _ = app.update(Message::WindowResized(Size::new(300.0, 600.0)));
        assert_eq!(
            app.toaster.platform().window_size(),
            Some(Size::new(300.0, 600.0))
        );
        assert!(app.toaster.current_height() >= before);
        assert_eq!(app.toaster.phase(), Phase::Entering);
    }

    #[test]
    fn demo_pixels_draw_tomato_disk_on_transparent_square() {
        let side = DEMO_IMAGE_SIDE;
        let pixels = demo_pixels(side);
        assert_eq!(pixels.len(), (side * side * 4) as usize);

        let pixel = |x: u32, y: u32| {
            let offset = ((y * side + x) * 4) as usize;
            [
                pixels[offset],
                pixels[offset + 1],
                pixels[offset + 2],
                pixels[offset + 3],
            ]
        };
        assert_eq!(pixel(side / 2, side / 2), palette::TOMATO.into_rgba8());
        assert_eq!(pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(pixel(side - 1, side - 1), [0, 0, 0, 0]);
    }

    #[test]
    fn single_pixel_image_is_filled() {
        assert_eq!(demo_pixels(1), palette::TOMATO.into_rgba8().to_vec());
    }

    #[test]
    fn tapping_banner_dismisses_toast() {
        let mut app = app();
        let _ = app.update(Message::ShowSingleLine);

        let _ = app.update(Message::Banner(SwipeEvent::Pressed));
        assert_eq!(app.toaster.phase(), Phase::Entering);

        let _ = app.update(Message::Banner(SwipeEvent::Released));
        assert_eq!(app.toaster.phase(), Phase::Leaving);
    }

    #[test]
    fn swiping_banner_up_dismisses_toast() {
        let mut app = app();
        let _ = app.update(Message::ShowSingleLine);

        let _ = app.update(Message::Banner(SwipeEvent::Moved(Point::new(100.0, 60.0))));
        let _ = app.update(Message::Banner(SwipeEvent::Pressed));
        let _ = app.update(Message::Banner(SwipeEvent::Moved(Point::new(100.0, 50.0))));
        assert_eq!(app.toaster.phase(), Phase::Entering);

        let _ = app.update(Message::Banner(SwipeEvent::Moved(Point::new(100.0, 10.0))));
        assert_eq!(app.toaster.phase(), Phase::Leaving);
    }

    #[test]
    fn hovering_banner_does_not_dismiss() {
        let mut app = app();
        let _ = app.update(Message::ShowSingleLine);

        let _ = app.update(Message::Banner(SwipeEvent::Moved(Point::new(100.0, 60.0))));
        let _ = app.update(Message::Banner(SwipeEvent::Moved(Point::new(100.0, 0.0))));
        let _ = app.update(Message::Banner(SwipeEvent::Exited));
        assert_eq!(app.toaster.phase(), Phase::Entering);
    }
}
