// SPDX-License-Identifier: MPL-2.0
//! Swipe state management
//!
//! Tracks pointer gestures over the banner. A tap (press then release) or an
//! upward drag past [`SWIPE_DISMISS_DISTANCE`] dismisses the toast.

use crate::config::SWIPE_DISMISS_DISTANCE;
use iced::Point;

/// Pointer events reported by the banner's mouse area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    Pressed,
    Moved(Point),
    Released,
    Exited,
}

/// Manages press-and-swipe state over the banner
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    /// Whether the pointer is currently held down on the banner
    pub is_pressed: bool,

    /// Position where the press started, once known
    pub start_position: Option<Point>,

    /// Last pointer position seen over the banner
    cursor: Option<Point>,
}

impl SwipeState {
    /// Feeds one pointer event. Returns `true` when the gesture dismisses the
    /// toast.
    pub fn update(&mut self, event: SwipeEvent) -> bool {
        match event {
            SwipeEvent::Pressed => {
                self.is_pressed = true;
                self.start_position = self.cursor;
                false
            }
            SwipeEvent::Moved(position) => self.moved(position),
            SwipeEvent::Released => {
                let tapped = self.is_pressed;
                self.stop();
                tapped
            }
            SwipeEvent::Exited => {
                self.cursor = None;
                self.stop();
                false
            }
        }
    }

    /// Clears the press without dismissing.
    pub fn stop(&mut self) {
        self.is_pressed = false;
        self.start_position = None;
    }

    fn moved(&mut self, position: Point) -> bool {
        self.cursor = Some(position);
        if !self.is_pressed {
            return false;
        }

        let Some(start) = self.start_position else {
            // Pressed before any move was reported: anchor here.
            self.start_position = Some(position);
            return false;
        };

        if start.y - position.y >= SWIPE_DISMISS_DISTANCE {
            self.stop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed_at(position: Point) -> SwipeState {
        let mut state = SwipeState::default();
        state.update(SwipeEvent::Moved(position));
        state.update(SwipeEvent::Pressed);
        state
    }

    #[test]
    fn default_swipe_state_is_not_pressed() {
        let state = SwipeState::default();
        assert!(!state.is_pressed);
        assert!(state.start_position.is_none());
    }

    #[test]
    fn press_records_last_cursor_position() {
        let state = pressed_at(Point::new(120.0, 80.0));
        assert!(state.is_pressed);
        assert_eq!(state.start_position, Some(Point::new(120.0, 80.0)));
    }

    #[test]
    fn tap_dismisses_on_release() {
        let mut state = pressed_at(Point::new(120.0, 80.0));
        assert!(state.update(SwipeEvent::Released));
        assert!(!state.is_pressed);
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut state = SwipeState::default();
        assert!(!state.update(SwipeEvent::Released));
    }

    #[test]
    fn upward_swipe_dismisses_once_past_distance() {
        let mut state = pressed_at(Point::new(120.0, 80.0));

        let short = Point::new(120.0, 80.0 - SWIPE_DISMISS_DISTANCE / 2.0);
        assert!(!state.update(SwipeEvent::Moved(short)));
        assert!(state.is_pressed);

        let far = Point::new(125.0, 80.0 - SWIPE_DISMISS_DISTANCE);
        assert!(state.update(SwipeEvent::Moved(far)));
        assert!(!state.is_pressed);

        // The gesture is spent: further movement and release are ignored.
        assert!(!state.update(SwipeEvent::Moved(Point::new(125.0, 0.0))));
        assert!(!state.update(SwipeEvent::Released));
    }

    #[test]
    fn downward_or_sideways_drag_does_not_dismiss() {
        let mut state = pressed_at(Point::new(120.0, 80.0));
        assert!(!state.update(SwipeEvent::Moved(Point::new(120.0, 200.0))));
        assert!(!state.update(SwipeEvent::Moved(Point::new(300.0, 80.0))));
        assert!(state.is_pressed);
    }

    #[test]
    fn moving_without_press_never_dismisses() {
        let mut state = SwipeState::default();
        assert!(!state.update(SwipeEvent::Moved(Point::new(120.0, 200.0))));
        assert!(!state.update(SwipeEvent::Moved(Point::new(120.0, 0.0))));
    }

    #[test]
    fn press_before_first_move_anchors_on_next_move() {
        let mut state = SwipeState::default();
        state.update(SwipeEvent::Pressed);
        assert!(state.start_position.is_none());

        assert!(!state.update(SwipeEvent::Moved(Point::new(50.0, 90.0))));
        assert_eq!(state.start_position, Some(Point::new(50.0, 90.0)));

        let up = Point::new(50.0, 90.0 - SWIPE_DISMISS_DISTANCE);
        assert!(state.update(SwipeEvent::Moved(up)));
    }

    #[test]
    fn leaving_the_banner_cancels_the_press() {
        let mut state = pressed_at(Point::new(120.0, 80.0));
        assert!(!state.update(SwipeEvent::Exited));
        assert!(!state.is_pressed);
        assert!(!state.update(SwipeEvent::Released));
    }
}
