// SPDX-License-Identifier: MPL-2.0
//! End-to-end scheduling on the desktop platform with a manual clock.

use approx::assert_relative_eq;
use iced::Size;
use iced_toast::config::Config;
use iced_toast::toast::{Clock, Deadline, Phase, Settings, ToastRequest, ToastStyle, Toaster};
use iced_toast::ui::design_tokens::DesignTokens;
use iced_toast::ui::platform::DesktopPlatform;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct ManualClock(Rc<Cell<Instant>>);

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

struct Demo {
    toaster: Toaster<DesktopPlatform<ManualClock>>,
    time: Rc<Cell<Instant>>,
    log: Rc<RefCell<Vec<(String, bool)>>>,
}

impl Demo {
    fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    fn with_settings(settings: Settings) -> Self {
        let time = Rc::new(Cell::new(Instant::now()));
        let mut platform = DesktopPlatform::with_clock(ManualClock(Rc::clone(&time)));
        platform.set_window_size(Size::new(390.0, 844.0));
        Self {
            toaster: Toaster::new(platform, settings),
            time,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn now(&self) -> Instant {
        self.time.get()
    }

    fn advance(&mut self, millis: u64) {
        // One millisecond per tick so each deferred event fires on its due time.
        for _ in 0..millis {
            self.time.set(self.time.get() + Duration::from_millis(1));
            self.toaster.tick();
        }
    }

    fn request(&self, message: &str) -> ToastRequest {
        let log = Rc::clone(&self.log);
        let name = message.to_string();
        self.toaster
            .settings()
            .request(message, ToastStyle::space(&DesignTokens))
            .on_complete(move |shown| log.borrow_mut().push((name.clone(), shown)))
    }

    fn log(&self) -> Vec<(String, bool)> {
        self.log.borrow().clone()
    }
}

#[test]
fn toast_with_deadline_hides_itself() {
    let mut demo = Demo::new();
    demo.toaster
        .show(demo.request("Bar").with_title("Foo").with_deadline(Deadline::from_secs_f64(4.0)));

    assert!(demo.toaster.is_showing());
    assert_eq!(demo.toaster.current().and_then(ToastRequest::title), Some("Foo"));

    // Enter (300 ms) + deadline (4 s) + leave (300 ms).
    demo.advance(300 + 4_000 + 300);

    assert!(!demo.toaster.is_showing());
    assert!(demo.toaster.current().is_none());
    assert_eq!(
        demo.log(),
        vec![("Bar".to_string(), true), ("Bar".to_string(), false)]
    );
}

#[test]
fn banner_slides_down_from_above_the_window() {
    let mut demo = Demo::new();
    demo.toaster.show(demo.request("Some message"));

    let height = demo.toaster.current_height();
    assert!(height > 0.0);

    let surface = demo.toaster.surface().expect("surface while showing");
    assert!(!surface.is_hidden());
    assert_relative_eq!(surface.frame_at(demo.now()).y, -height);
    assert_relative_eq!(surface.frame_at(demo.now()).width, 390.0);

    demo.advance(300);
    let surface = demo.toaster.surface().expect("surface while showing");
    assert_relative_eq!(surface.frame_at(demo.now()).y, 0.0);
    assert_eq!(demo.toaster.phase(), Phase::Visible);
}

#[test]
fn sticky_toast_waits_for_explicit_dismissal() {
    let mut demo = Demo::new();
    demo.toaster
        .show(demo.request("Sticky").with_deadline(Deadline::STICKY));

    demo.advance(60_000);
    assert_eq!(demo.toaster.phase(), Phase::Visible);

    demo.toaster.dismiss();
    demo.advance(300);
    assert!(!demo.toaster.is_showing());
}

#[test]
fn back_to_back_requests_follow_after_settle_delay() {
    let mut demo = Demo::new();
    demo.toaster.show(demo.request("first"));
    demo.advance(100);
    demo.toaster.show(demo.request("second"));
    assert_eq!(demo.toaster.queued_count(), 1);

    demo.advance(200);
    demo.toaster.dismiss();
    demo.advance(300);
    assert!(!demo.toaster.is_showing());

    demo.advance(200);
    assert_eq!(demo.toaster.current().map(ToastRequest::message), Some("second"));
    assert_eq!(demo.toaster.phase(), Phase::Entering);
}

#[test]
fn queue_shows_every_request_once_in_order() {
    let mut demo = Demo::new();
    for name in ["a", "b", "c", "d"] {
        demo.toaster.show(demo.request(name));
    }

    // Four full cycles with the default 4 s deadline and settle delays.
    demo.advance(4 * (300 + 4_000 + 300 + 200));

    let shown: Vec<String> = demo
        .log()
        .into_iter()
        .filter(|(_, shown)| *shown)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(shown, ["a", "b", "c", "d"]);
    assert!(!demo.toaster.has_pending_work());
}

#[test]
fn cancel_next_then_show_keeps_only_the_new_request() {
    let mut demo = Demo::new();
    demo.toaster.show(demo.request("current"));
    demo.toaster.show(demo.request("old 1"));
    demo.toaster.show(demo.request("old 2"));

    demo.toaster.cancel_next_toasts();
    demo.toaster.show(demo.request("new"));
    assert_eq!(demo.toaster.queued_count(), 1);

    demo.advance(300 + 4_000 + 300 + 200 + 300);
    assert_eq!(demo.toaster.current().map(ToastRequest::message), Some("new"));
}

#[test]
fn cancel_all_is_immediate_and_silent() {
    let mut demo = Demo::new();
    demo.toaster.show(demo.request("current"));
    demo.toaster.show(demo.request("queued"));
    demo.advance(100);

    demo.toaster.cancel_all_toasts();
    assert!(!demo.toaster.is_showing());
    assert!(demo.toaster.current().is_none());
    assert!(demo.toaster.surface().is_none());
    assert_relative_eq!(demo.toaster.current_height(), 0.0);

    demo.advance(10_000);
    assert!(demo.log().is_empty());
}

#[test]
fn window_resize_relayouts_current_toast() {
    let mut demo = Demo::new();
    let text = "Mars is the fourth planet from the Sun. ".repeat(4);
    demo.toaster.show(demo.request(&text).with_deadline(Deadline::STICKY));
    demo.advance(300);
    let wide = demo.toaster.current_height();

    demo.toaster.begin_transition();
    assert!(demo.toaster.surface().is_some_and(|surface| surface.is_hidden()));
    demo.toaster
        .platform_mut()
        .set_window_size(Size::new(200.0, 844.0));
    demo.toaster.end_transition();

    assert!(demo.toaster.current_height() > wide);
    assert_eq!(demo.toaster.phase(), Phase::Visible);
    assert!(demo.toaster.surface().is_some_and(|surface| !surface.is_hidden()));
}

#[test]
fn no_window_drops_requests() {
    let time = Rc::new(Cell::new(Instant::now()));
    let platform = DesktopPlatform::with_clock(ManualClock(time));
    let mut toaster = Toaster::new(platform, Settings::default());

    toaster.show(ToastRequest::new("lost", ToastStyle::space(&DesignTokens)));
    assert!(!toaster.is_showing());
    assert_eq!(toaster.queued_count(), 0);
}

#[test]
fn settings_from_config_drive_timing() {
    let config = Config {
        animation_duration_ms: Some(100),
        auto_dismiss_secs: Some(1.0),
        settle_delay_ms: Some(0),
        style: None,
    };
    let mut demo = Demo::with_settings(config.toaster_settings());
    demo.toaster.show(demo.request("quick"));

    demo.advance(100 + 1_000 + 100);
    assert!(!demo.toaster.is_showing());
    assert_eq!(demo.log().len(), 2);
}
