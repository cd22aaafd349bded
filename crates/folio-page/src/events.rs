//! Event source abstraction
//!
//! Handlers are plain closures registered per [`EventKind`]. The browser
//! glue forwards real DOM events as [`PageEvent`] values; tests construct
//! them directly.

use crate::geometry::{Point, Rect, ScrollMetrics};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll(ScrollMetrics),
    AnchorClick {
        href: String,
    },
    Intersection {
        element: String,
        rect: Rect,
        viewport_height: f64,
    },
    ButtonPress {
        button: String,
        pointer: Point,
        rect: Rect,
    },
    ThemeToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    AnchorClick,
    Intersection,
    ButtonPress,
    ThemeToggle,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Scroll(_) => EventKind::Scroll,
            PageEvent::AnchorClick { .. } => EventKind::AnchorClick,
            PageEvent::Intersection { .. } => EventKind::Intersection,
            PageEvent::ButtonPress { .. } => EventKind::ButtonPress,
            PageEvent::ThemeToggle => EventKind::ThemeToggle,
        }
    }
}

/// Returns true to suppress the browser's default action
pub type Handler = Box<dyn FnMut(&PageEvent) -> bool>;

/// Something handlers can be registered against
pub trait EventSource {
    fn register(&mut self, kind: EventKind, handler: Handler);
}

/// Summary of one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub handled: usize,
    pub default_prevented: bool,
}

/// In-process event source
///
/// Handlers run in registration order on the calling thread.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    pub fn dispatch(&mut self, event: &PageEvent) -> Dispatch {
        let mut dispatch = Dispatch::default();
        if let Some(handlers) = self.handlers.get_mut(&event.kind()) {
            for handler in handlers.iter_mut() {
                dispatch.handled += 1;
                if handler(event) {
                    dispatch.default_prevented = true;
                }
            }
        }
        dispatch
    }
}

impl EventSource for EventBus {
    fn register(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_only_reaches_matching_kind() {
        let mut bus = EventBus::new();
        let scrolls = Rc::new(Cell::new(0));

        let counter = scrolls.clone();
        bus.register(
            EventKind::Scroll,
            Box::new(move |_: &PageEvent| {
                counter.set(counter.get() + 1);
                false
            }),
        );

        let dispatch = bus.dispatch(&PageEvent::Scroll(ScrollMetrics::default()));
        assert_eq!(dispatch.handled, 1);
        assert!(!dispatch.default_prevented);

        let dispatch = bus.dispatch(&PageEvent::ThemeToggle);
        assert_eq!(dispatch, Dispatch::default());
        assert_eq!(scrolls.get(), 1);
    }

    #[test]
    fn test_any_handler_can_prevent_default() {
        let mut bus = EventBus::new();
        bus.register(EventKind::AnchorClick, Box::new(|_: &PageEvent| false));
        bus.register(EventKind::AnchorClick, Box::new(|_: &PageEvent| true));

        let dispatch = bus.dispatch(&PageEvent::AnchorClick {
            href: "#about".to_string(),
        });
        assert_eq!(dispatch.handled, 2);
        assert!(dispatch.default_prevented);
        assert_eq!(bus.handler_count(EventKind::AnchorClick), 2);
    }
}
