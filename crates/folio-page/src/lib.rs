//! # folio-page
//!
//! Page-level interactions for the folio portfolio page, as pure state
//! plus a rendering seam:
//!
//! - [`nav`]: in-page anchor navigation and active section tracking
//! - [`progress`]: scroll progress bar width
//! - [`reveal`]: one-shot reveal-on-view tracking
//! - [`ripple`]: button press ripple geometry
//! - [`theme`]: light/dark preference persisted in a key/value store
//! - [`events`]: the event source handlers are registered against
//! - [`page`]: the handlers themselves, applying results via [`PageSurface`]
//!
//! Handlers can be driven directly with constructed [`PageEvent`] values,
//! without a browser.

pub mod config;
pub mod events;
pub mod geometry;
pub mod nav;
pub mod page;
pub mod progress;
pub mod reveal;
pub mod ripple;
pub mod surface;
pub mod theme;

pub use config::{PageConfig, ScrollConfig};
pub use events::{Dispatch, EventBus, EventKind, EventSource, Handler, PageEvent};
pub use geometry::{Point, Rect, ScrollMetrics, SectionBounds};
pub use nav::{active_section, anchor_target};
pub use page::Page;
pub use progress::scroll_progress;
pub use reveal::{intersection_ratio, is_intersecting, RevealState, RevealTracker};
pub use ripple::{ripple_at, Ripple};
pub use surface::PageSurface;
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemePreference, UnknownTheme, THEME_KEY};
