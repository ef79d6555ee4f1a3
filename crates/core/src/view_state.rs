//! Ephemeral state owned by a single view.
//!
//! Nothing here is shared: each view creates its own [`ViewState`] and drops it on teardown.
//! Pointer observation is scoped through [`PointerSubscription`]; the subscription borrows
//! the state mutably, so at most one observer can exist and it is always detached by the
//! time the borrow ends.

use crate::navigation::Section;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Default)]
pub struct ViewState {
    pointer: PointerPosition,
    menu_open: bool,
    observing: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Start observing pointer movement until the returned subscription is dropped.
    pub fn attach_pointer(&mut self) -> PointerSubscription<'_> {
        self.observing = true;
        tracing::trace!("pointer observer attached");
        PointerSubscription { state: self }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Navigate to a home page section: closes the menu and returns the anchor to scroll to.
    pub fn scroll_to(&mut self, section: Section) -> &'static str {
        self.close_menu();
        section.anchor()
    }
}

/// A live pointer observer. Dropping it detaches and resets the position.
#[derive(Debug)]
pub struct PointerSubscription<'a> {
    state: &'a mut ViewState,
}

impl PointerSubscription<'_> {
    /// Record a pointer event. The latest event always wins.
    pub fn observe(&mut self, x: f64, y: f64) {
        self.state.pointer = PointerPosition { x, y };
    }

    pub fn position(&self) -> PointerPosition {
        self.state.pointer
    }
}

impl Drop for PointerSubscription<'_> {
    fn drop(&mut self) {
        self.state.observing = false;
        self.state.pointer = PointerPosition::default();
        tracing::trace!("pointer observer detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_pointer_event_wins() {
        let mut view = ViewState::new();
        let mut sub = view.attach_pointer();
        sub.observe(10.0, 20.0);
        sub.observe(3.5, 4.0);
        assert_eq!(sub.position(), PointerPosition { x: 3.5, y: 4.0 });
    }

    #[test]
    fn dropping_subscription_detaches_and_resets() {
        let mut view = ViewState::new();
        {
            let mut sub = view.attach_pointer();
            sub.observe(100.0, 200.0);
        }
        assert!(!view.is_observing());
        assert_eq!(view.pointer(), PointerPosition::default());
    }

    #[test]
    fn scroll_to_closes_menu() {
        let mut view = ViewState::new();
        assert!(view.toggle_menu());
        assert_eq!(view.scroll_to(Section::Projects), "projects");
        assert!(!view.menu_open());
    }

    #[test]
    fn toggle_flips_menu() {
        let mut view = ViewState::new();
        assert!(view.toggle_menu());
        assert!(!view.toggle_menu());
    }
}
