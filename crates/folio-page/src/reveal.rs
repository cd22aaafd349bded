//! Reveal-on-view tracking
//!
//! Elements start hidden. The first time enough of an element is inside
//! the (margin-adjusted) viewport it becomes visible and stops being
//! observed for good.

use crate::config::ScrollConfig;
use crate::geometry::Rect;
use std::collections::HashMap;
use tracing::debug;

/// Whether `element` overlaps or touches the margin-adjusted viewport
///
/// Edge contact counts, so a zero threshold reveals elements that only
/// touch the viewport.
pub fn is_intersecting(element: &Rect, viewport_height: f64, bottom_margin: f64) -> bool {
    let root_bottom = viewport_height + bottom_margin;
    root_bottom > 0.0 && element.bottom() >= 0.0 && element.top() <= root_bottom
}

/// Fraction of `element` inside the viewport, in `[0, 1]`
///
/// The viewport spans `0..viewport_height + bottom_margin`; a negative
/// margin shrinks it from the bottom. Zero-height elements count as fully
/// visible when their edge lies inside the viewport.
pub fn intersection_ratio(element: &Rect, viewport_height: f64, bottom_margin: f64) -> f64 {
    let root_bottom = viewport_height + bottom_margin;
    if root_bottom <= 0.0 {
        return 0.0;
    }

    if element.height <= 0.0 {
        let inside = element.top() >= 0.0 && element.top() <= root_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let visible = element.bottom().min(root_bottom) - element.top().max(0.0);
    (visible / element.height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Tracks which observed elements have been revealed
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    bottom_margin: f64,
    states: HashMap<String, RevealState>,
}

impl RevealTracker {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
            states: HashMap::new(),
        }
    }

    pub fn from_config(config: &ScrollConfig) -> Self {
        Self::new(config.reveal_threshold, config.reveal_bottom_margin)
    }

    /// Starts observing an element; already revealed elements stay visible
    pub fn observe(&mut self, element: impl Into<String>) {
        self.states.entry(element.into()).or_insert(RevealState::Hidden);
    }

    pub fn state(&self, element: &str) -> Option<RevealState> {
        self.states.get(element).copied()
    }

    pub fn is_observed(&self, element: &str) -> bool {
        self.state(element) == Some(RevealState::Hidden)
    }

    /// Number of elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == RevealState::Hidden)
            .count()
    }

    /// Feeds one observation of an element
    ///
    /// Reveals when the element intersects and `ratio` reaches the
    /// threshold. Returns true exactly once per element: the call that
    /// reveals it.
    pub fn on_observation(&mut self, element: &str, intersecting: bool, ratio: f64) -> bool {
        let Some(state) = self.states.get_mut(element) else {
            return false;
        };

        if *state == RevealState::Hidden && intersecting && ratio >= self.threshold {
            *state = RevealState::Visible;
            debug!(element, ratio, "Revealing element");
            true
        } else {
            false
        }
    }

    /// Computes the observation for `rect` and feeds it
    pub fn on_rect(&mut self, element: &str, rect: &Rect, viewport_height: f64) -> bool {
        let intersecting = is_intersecting(rect, viewport_height, self.bottom_margin);
        let ratio = intersection_ratio(rect, viewport_height, self.bottom_margin);
        self.on_observation(element, intersecting, ratio)
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::from_config(&ScrollConfig::default())
    }
}
