// File: src/page.rs
// Purpose: Page interaction handlers wired to an event source

use crate::config::ScrollConfig;
use crate::events::{EventKind, EventSource, PageEvent};
use crate::geometry::{Point, Rect, ScrollMetrics, SectionBounds};
use crate::nav::{active_section, anchor_target};
use crate::progress::scroll_progress;
use crate::reveal::RevealTracker;
use crate::ripple::{ripple_at, Ripple};
use crate::surface::PageSurface;
use crate::theme::{PreferenceStore, Theme, ThemePreference};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// All page-level interaction state
///
/// Each `on_*` method is an independent handler; `handle` routes a
/// [`PageEvent`] to the right one and `attach` registers it on an
/// [`EventSource`].
pub struct Page<S: PageSurface, P: PreferenceStore> {
    config: ScrollConfig,
    sections: Vec<SectionBounds>,
    active: Option<String>,
    reveal: RevealTracker,
    theme: ThemePreference<P>,
    surface: S,
}

impl<S: PageSurface, P: PreferenceStore> Page<S, P> {
    /// Creates the page state and applies the initial theme
    pub fn new(config: &ScrollConfig, mut surface: S, theme: ThemePreference<P>) -> Self {
        surface.apply_theme(theme.current());

        Self {
            config: config.clone(),
            sections: Vec::new(),
            active: None,
            reveal: RevealTracker::from_config(config),
            theme,
            surface,
        }
    }

    /// Replaces section layout (initial load, resize)
    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    /// Starts watching an element for reveal
    pub fn observe(&mut self, element: impl Into<String>) {
        self.reveal.observe(element);
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn reveal_tracker(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Progress bar and active nav, recomputed on every scroll
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) {
        let percent = scroll_progress(
            metrics.scroll_y,
            metrics.scroll_height,
            metrics.viewport_height,
        );
        self.surface.set_progress(percent);

        let current = active_section(&self.sections, metrics.scroll_y, self.config.nav_offset)
            .map(str::to_string);
        trace!(scroll_y = metrics.scroll_y, percent, active = ?current, "Scroll");
        self.set_active(current);
    }

    /// Smooth-scrolls to an in-page anchor
    ///
    /// Returns true when the link was handled and the default jump should be
    /// suppressed.
    pub fn on_anchor_click(&mut self, href: &str) -> bool {
        let Some(target) = anchor_target(href) else {
            return false;
        };

        if !self.sections.iter().any(|section| section.id == target) {
            debug!(href, "Anchor target not found");
            return false;
        }

        let target = target.to_string();
        debug!(section = %target, "Scrolling to section");
        self.surface.scroll_to(&target);
        self.set_active(Some(target));
        true
    }

    /// Reveals an element the first time it is sufficiently visible
    pub fn on_intersection(&mut self, element: &str, rect: &Rect, viewport_height: f64) -> bool {
        if !self.reveal.on_rect(element, rect, viewport_height) {
            return false;
        }

        self.surface.reveal(element);
        self.surface.unobserve(element);
        true
    }

    pub fn on_button_press(&mut self, button: &str, pointer: Point, rect: &Rect) -> Ripple {
        let ripple = ripple_at(pointer, rect, self.config.ripple_duration());
        self.surface.spawn_ripple(button, &ripple);
        ripple
    }

    pub fn on_theme_toggle(&mut self) -> Theme {
        let theme = self.theme.toggle();
        debug!(%theme, "Theme toggled");
        self.surface.apply_theme(theme);
        theme
    }

    /// Routes an event to its handler
    pub fn handle(&mut self, event: &PageEvent) -> bool {
        match event {
            PageEvent::Scroll(metrics) => {
                self.on_scroll(metrics);
                false
            }
            PageEvent::AnchorClick { href } => self.on_anchor_click(href),
            PageEvent::Intersection {
                element,
                rect,
                viewport_height,
            } => {
                self.on_intersection(element, rect, *viewport_height);
                false
            }
            PageEvent::ButtonPress {
                button,
                pointer,
                rect,
            } => {
                self.on_button_press(button, *pointer, rect);
                false
            }
            PageEvent::ThemeToggle => {
                self.on_theme_toggle();
                false
            }
        }
    }

    fn set_active(&mut self, section: Option<String>) {
        if self.active != section {
            self.surface.set_active_nav(section.as_deref());
            self.active = section;
        }
    }
}

impl<S, P> Page<S, P>
where
    S: PageSurface + 'static,
    P: PreferenceStore + 'static,
{
    /// Registers one handler per event kind on `source`
    ///
    /// The returned handle shares state with the registered handlers.
    pub fn attach<E: EventSource>(self, source: &mut E) -> Rc<RefCell<Self>> {
        let page = Rc::new(RefCell::new(self));

        for kind in [
            EventKind::Scroll,
            EventKind::AnchorClick,
            EventKind::Intersection,
            EventKind::ButtonPress,
            EventKind::ThemeToggle,
        ] {
            let page = Rc::clone(&page);
            source.register(
                kind,
                Box::new(move |event: &PageEvent| page.borrow_mut().handle(event)),
            );
        }

        page
    }
}
