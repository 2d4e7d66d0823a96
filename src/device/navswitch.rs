//! Queue-backed navigation switch.

use std::collections::{HashSet, VecDeque};

use crate::device::InputSource;
use crate::game::types::NavEvent;

/// Presses pushed with [`NavQueue::press`] are latched by the next `poll` and
/// can each be taken once until the poll after that. A press of an already
/// latched event is merged.
#[derive(Debug, Clone, Default)]
pub struct NavQueue {
    pending: VecDeque<NavEvent>,
    latched: HashSet<NavEvent>,
}

impl NavQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, event: NavEvent) {
        self.pending.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for NavQueue {
    fn poll(&mut self) {
        self.latched.clear();
        self.latched.extend(self.pending.drain(..));
    }

    fn take_event(&mut self, event: NavEvent) -> bool {
        self.latched.remove(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_visible_only_after_poll() {
        let mut nav = NavQueue::new();
        nav.press(NavEvent::North);
        assert!(!nav.take_event(NavEvent::North));
        nav.poll();
        assert!(nav.take_event(NavEvent::North));
    }

    #[test]
    fn test_event_is_consumed_once() {
        let mut nav = NavQueue::new();
        nav.press(NavEvent::Select);
        nav.press(NavEvent::Select);
        nav.poll();
        assert!(nav.take_event(NavEvent::Select));
        assert!(!nav.take_event(NavEvent::Select));
        assert_eq!(nav.pending(), 0);
    }

    #[test]
    fn test_untaken_press_expires_on_next_poll() {
        let mut nav = NavQueue::new();
        nav.press(NavEvent::West);
        nav.poll();
        nav.poll();
        assert!(!nav.take_event(NavEvent::West));
    }
}
