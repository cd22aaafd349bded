//! Scroll progress bar

/// Percentage of the scrollable distance covered, in `[0, 100]`
///
/// `scroll_y / (scroll_height - viewport_height) * 100`. A page that
/// cannot scroll reports 0. Overscroll (rubber-banding) is clamped.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_y.is_finite() {
        return 0.0;
    }

    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}
