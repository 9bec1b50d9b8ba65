//! Page navigation state machine.
//!
//! The site shows one section at a time. Wheel and keyboard input move one
//! page forward or back; while a page transition is animating, further
//! input is dropped so a single flick of the wheel can't skip pages. The
//! caller owns the timer: after a transition starts it waits
//! [`TRANSITION`] and then calls [`PageNavigator::release`].
//!
//! Direct selection from the nav bar is never debounced.

use std::time::Duration;

/// Minimum absolute wheel delta (in pixels) that counts as a page turn
pub const WHEEL_THRESHOLD: f64 = 20.0;

/// Duration of the slide animation between pages
pub const TRANSITION: Duration = Duration::from_millis(800);

/// Direction of a relative page move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
    First,
    Last,
}

impl Direction {
    /// Map a keyboard key name (as reported by the DOM) to a direction.
    ///
    /// Enter and Space are left alone: they activate the focused nav entry
    /// or theme toggle.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" => Some(Direction::Next),
            "ArrowUp" | "PageUp" => Some(Direction::Previous),
            "Home" => Some(Direction::First),
            "End" => Some(Direction::Last),
            _ => None,
        }
    }
}

/// Position of a section relative to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOffset {
    /// At or before the current page: slid into view
    Shown,
    /// After the current page: parked below the viewport
    Hidden,
}

impl SectionOffset {
    /// CSS `translateY` value for this offset
    pub fn translate_y(&self) -> &'static str {
        match self {
            SectionOffset::Shown => "0%",
            SectionOffset::Hidden => "100%",
        }
    }
}

/// Current page index plus the transition guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNavigator {
    index: usize,
    len: usize,
    busy: bool,
}

impl PageNavigator {
    /// Navigator over `len` pages, starting on the first.
    ///
    /// A zero length is treated as a single page so the index is always
    /// valid.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            busy: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.len
    }

    /// Whether a transition is still running
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    /// Handle a wheel event. Returns the new index when the page changed.
    pub fn wheel(&mut self, delta_y: f64) -> Option<usize> {
        if delta_y > WHEEL_THRESHOLD {
            self.step(Direction::Next)
        } else if delta_y < -WHEEL_THRESHOLD {
            self.step(Direction::Previous)
        } else {
            None
        }
    }

    /// Move relative to the current page. Ignored while busy or when
    /// already at the boundary in that direction.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        if self.busy {
            return None;
        }

        let target = match direction {
            Direction::Next if !self.is_last() => self.index + 1,
            Direction::Previous if !self.is_first() => self.index - 1,
            Direction::First if !self.is_first() => 0,
            Direction::Last if !self.is_last() => self.len - 1,
            _ => return None,
        };

        self.index = target;
        self.busy = true;
        tracing::debug!(index = target, ?direction, "Page transition started");
        Some(target)
    }

    /// Jump straight to `index`, clamped to the last page.
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index.min(self.len - 1);
        self.index
    }

    /// End the running transition.
    pub fn release(&mut self) {
        self.busy = false;
    }

    /// Where section `section_index` sits for the current page.
    pub fn offset_for(&self, section_index: usize) -> SectionOffset {
        if section_index <= self.index {
            SectionOffset::Shown
        } else {
            SectionOffset::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page() {
        let nav = PageNavigator::new(6);
        assert_eq!(nav.index(), 0);
        assert_eq!(nav.page_count(), 6);
        assert!(!nav.is_busy());
        assert!(nav.is_first());
    }

    #[test]
    fn wheel_below_threshold_is_ignored() {
        let mut nav = PageNavigator::new(3);
        assert_eq!(nav.wheel(20.0), None);
        assert_eq!(nav.wheel(-20.0), None);
        assert_eq!(nav.wheel(3.5), None);
        assert!(!nav.is_busy());
    }

    #[test]
    fn wheel_down_advances_and_locks() {
        let mut nav = PageNavigator::new(3);
        assert_eq!(nav.wheel(120.0), Some(1));
        assert!(nav.is_busy());

        // Ignored until released
        assert_eq!(nav.wheel(120.0), None);
        assert_eq!(nav.index(), 1);

        nav.release();
        assert_eq!(nav.wheel(120.0), Some(2));
    }

    #[test]
    fn wheel_stops_at_boundaries() {
        let mut nav = PageNavigator::new(2);
        assert_eq!(nav.wheel(-100.0), None);
        assert!(!nav.is_busy());

        nav.select(1);
        assert_eq!(nav.wheel(100.0), None);
        assert!(!nav.is_busy());

        assert_eq!(nav.wheel(-100.0), Some(0));
    }

    #[test]
    fn select_clamps_and_ignores_busy() {
        let mut nav = PageNavigator::new(4);
        nav.wheel(50.0);
        assert!(nav.is_busy());

        assert_eq!(nav.select(3), 3);
        assert_eq!(nav.select(99), 3);
        assert_eq!(nav.select(0), 0);
    }

    #[test]
    fn home_and_end_jump() {
        let mut nav = PageNavigator::new(5);
        assert_eq!(nav.step(Direction::Last), Some(4));
        nav.release();
        assert_eq!(nav.step(Direction::Last), None);
        assert_eq!(nav.step(Direction::First), Some(0));
    }

    #[test]
    fn key_mapping() {
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Next));
        assert_eq!(Direction::from_key("PageUp"), Some(Direction::Previous));
        assert_eq!(Direction::from_key("End"), Some(Direction::Last));
        assert_eq!(Direction::from_key("a"), None);
    }

    #[test]
    fn activation_keys_do_not_page() {
        assert_eq!(Direction::from_key(" "), None);
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn offsets_follow_index() {
        let mut nav = PageNavigator::new(4);
        nav.select(1);
        assert_eq!(nav.offset_for(0), SectionOffset::Shown);
        assert_eq!(nav.offset_for(1), SectionOffset::Shown);
        assert_eq!(nav.offset_for(2), SectionOffset::Hidden);
        assert_eq!(SectionOffset::Hidden.translate_y(), "100%");
    }

    #[test]
    fn zero_length_is_single_page() {
        let mut nav = PageNavigator::new(0);
        assert_eq!(nav.page_count(), 1);
        assert_eq!(nav.wheel(100.0), None);
        assert_eq!(nav.select(5), 0);
    }
}
