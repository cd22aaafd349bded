//! Rendering seam for page interactions

use crate::ripple::Ripple;
use crate::theme::Theme;

/// Applies page state to the document
pub trait PageSurface {
    /// Smoothly scrolls the section into view
    fn scroll_to(&mut self, section: &str);

    /// Highlights the nav link for `section`, or none
    fn set_active_nav(&mut self, section: Option<&str>);

    /// Sets the progress bar width in percent
    fn set_progress(&mut self, percent: f64);

    /// Transitions a hidden element to visible
    fn reveal(&mut self, element: &str);

    /// Stops observing an element
    fn unobserve(&mut self, element: &str);

    fn spawn_ripple(&mut self, button: &str, ripple: &Ripple);

    fn apply_theme(&mut self, theme: Theme);
}
