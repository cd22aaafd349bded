//! Button press ripple

use crate::geometry::{Point, Rect};
use serde::Serialize;
use std::time::Duration;

/// A circle drawn inside a button, positioned relative to the button
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ripple {
    /// Left edge relative to the button
    pub x: f64,
    /// Top edge relative to the button
    pub y: f64,
    /// Diameter
    pub size: f64,
    #[serde(skip)]
    pub duration: Duration,
}

/// Ripple centered on `pointer`, large enough to cover the button
pub fn ripple_at(pointer: Point, button: &Rect, duration: Duration) -> Ripple {
    let size = button.width.max(button.height);
    Ripple {
        x: pointer.x - button.x - size / 2.0,
        y: pointer.y - button.y - size / 2.0,
        size,
        duration,
    }
}
