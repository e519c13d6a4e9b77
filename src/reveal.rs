//! Viewport-reveal state, independent of any rendering target.
//!
//! The browser side (see `app::hooks`) forwards IntersectionObserver
//! notifications into a [`RevealState`]; everything that can be decided
//! without a DOM lives here so it can be driven deterministically in tests.

/// Configuration for a single observed element.
///
/// `threshold` is the fraction of the element's area that must be inside the
/// viewport before it counts as visible. `root_margin` grows or shrinks the
/// viewport rectangle using CSS margin syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealOptions {
    /// Options with a given visibility threshold and the default root margin.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

/// Visibility of one observed element.
///
/// Starts hidden, follows intersection notifications while attached, and
/// freezes once detached so a torn-down component can never observe another
/// transition. One instance per observed element; never shared.
#[derive(Debug, Default)]
pub struct RevealState {
    visible: bool,
    detached: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection notification. Ignored after [`detach`].
    ///
    /// [`detach`]: RevealState::detach
    pub fn notify(&mut self, intersecting: bool) {
        if !self.detached {
            self.visible = intersecting;
        }
    }

    /// Stop reacting to notifications. Late callbacks from an observer that
    /// has not been disconnected yet become no-ops.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let state = RevealState::new();
        assert!(!state.is_visible());
    }

    #[test]
    fn test_never_notified_stays_hidden() {
        let mut state = RevealState::new();
        // No notifications at all, then teardown
        state.detach();
        assert!(!state.is_visible());
    }

    #[test]
    fn test_becomes_visible_on_crossing() {
        let mut state = RevealState::new();
        state.notify(true);
        assert!(state.is_visible());
    }

    #[test]
    fn test_follows_exit_and_reentry() {
        let mut state = RevealState::new();
        state.notify(true);
        state.notify(false);
        assert!(!state.is_visible());
        state.notify(true);
        assert!(state.is_visible());
    }

    #[test]
    fn test_no_updates_after_detach() {
        let mut state = RevealState::new();
        state.notify(true);
        state.detach();

        // A late observer callback must not change anything
        state.notify(false);
        assert!(state.is_visible());

        let mut hidden = RevealState::new();
        hidden.detach();
        hidden.notify(true);
        assert!(!hidden.is_visible());
    }

    #[test]
    fn test_default_options() {
        let opts = RevealOptions::default();
        assert_eq!(opts.threshold, 0.0);
        assert_eq!(opts.root_margin, "0px");
    }

    #[test]
    fn test_threshold_clamped_to_unit_interval() {
        assert_eq!(RevealOptions::with_threshold(1.5).threshold, 1.0);
        assert_eq!(RevealOptions::with_threshold(-0.1).threshold, 0.0);
        assert_eq!(RevealOptions::with_threshold(0.1).threshold, 0.1);
    }
}
