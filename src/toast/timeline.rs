// SPDX-License-Identifier: MPL-2.0
//! Deferred events for a single-threaded event loop.
//!
//! A [`Timeline`] holds events due at a given instant. Nothing runs on its
//! own: the owner polls [`Timeline::pop_due`] from its event loop turn, so
//! callbacks never overlap. Every scheduled event gets a [`TimerHandle`]
//! that can cancel it until it is popped.

use std::time::{Duration, Instant};

/// Cancellation handle for a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<E> {
    handle: TimerHandle,
    due: Instant,
    event: E,
}

#[derive(Debug)]
pub struct Timeline<E> {
    next_id: u64,
    /// Sorted by due instant, then by scheduling order.
    entries: Vec<Entry<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> Timeline<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to become due at `due`.
    ///
    /// Events due at the same instant pop in the order they were scheduled.
    pub fn schedule(&mut self, due: Instant, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let index = self.entries.partition_point(|entry| entry.due <= due);
        self.entries.insert(index, Entry { handle, due, event });
        handle
    }

    /// Schedules `event` to become due `delay` after `now`.
    ///
    /// Returns `None` without scheduling when the due instant is past what
    /// [`Instant`] can represent; such an event would never become due.
    pub fn schedule_after(
        &mut self,
        now: Instant,
        delay: Duration,
        event: E,
    ) -> Option<TimerHandle> {
        let due = now.checked_add(delay)?;
        Some(self.schedule(due, event))
    }

    /// Cancels a pending event.
    ///
    /// Returns `false` when the event already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.handle == handle) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes and returns the earliest event due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<E> {
        match self.entries.first() {
            Some(entry) if entry.due <= now => Some(self.entries.remove(0).event),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Instant of the earliest pending event.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.first().map(|entry| entry.due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_events_in_due_order() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        timeline.schedule(t0 + Duration::from_millis(300), "late");
        timeline.schedule(t0 + Duration::from_millis(100), "early");

        let now = t0 + Duration::from_secs(1);
        assert_eq!(timeline.pop_due(now), Some("early"));
        assert_eq!(timeline.pop_due(now), Some("late"));
        assert_eq!(timeline.pop_due(now), None);
    }

    #[test]
    fn equal_due_instants_keep_scheduling_order() {
        let due = Instant::now();
        let mut timeline = Timeline::new();
        timeline.schedule(due, 1);
        timeline.schedule(due, 2);
        timeline.schedule(due, 3);

        let popped: Vec<_> = std::iter::from_fn(|| timeline.pop_due(due)).collect();
        assert_eq!(popped, vec![1, 2, 3]);
    }

    #[test]
    fn nothing_pops_before_it_is_due() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        timeline.schedule(t0 + Duration::from_secs(4), ());

        assert_eq!(timeline.pop_due(t0 + Duration::from_secs(3)), None);
        assert_eq!(timeline.next_due(), Some(t0 + Duration::from_secs(4)));
        assert_eq!(timeline.pop_due(t0 + Duration::from_secs(4)), Some(()));
    }

    #[test]
    fn cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        let handle = timeline.schedule(t0, "hide");
        assert!(timeline.is_pending(handle));

        assert!(timeline.cancel(handle));
        assert!(!timeline.is_pending(handle));
        assert_eq!(timeline.pop_due(t0), None);
    }

    #[test]
    fn cancelling_twice_is_a_no_op() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        let handle = timeline.schedule(t0, ());

        assert!(timeline.cancel(handle));
        assert!(!timeline.cancel(handle));
        assert!(timeline.is_empty());
    }

    #[test]
    fn cancelling_a_fired_event_is_a_no_op() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        let handle = timeline.schedule(t0, ());
        timeline.pop_due(t0);

        assert!(!timeline.cancel(handle));
    }

    #[test]
    fn schedule_after_offsets_from_now() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        let handle = timeline.schedule_after(t0, Duration::from_secs(2), "hide");

        assert!(handle.is_some_and(|handle| timeline.is_pending(handle)));
        assert_eq!(timeline.next_due(), Some(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn unrepresentable_due_instant_is_not_scheduled() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();

        assert_eq!(timeline.schedule_after(t0, Duration::MAX, ()), None);
        assert!(timeline.is_empty());
    }
}
