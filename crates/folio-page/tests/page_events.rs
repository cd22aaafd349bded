//! Page handlers driven through the event bus with constructed events

use folio_page::{
    EventBus, EventKind, MemoryStore, Page, PageEvent, PageSurface, Point, PreferenceStore, Rect,
    Ripple, ScrollConfig, ScrollMetrics, SectionBounds, Theme, ThemePreference, THEME_KEY,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    ScrollTo(String),
    ActiveNav(Option<String>),
    Progress(f64),
    Reveal(String),
    Unobserve(String),
    Ripple(String, Ripple),
    Theme(Theme),
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn count(&self, f: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| f(op)).count()
    }
}

impl PageSurface for RecordingSurface {
    fn scroll_to(&mut self, section: &str) {
        self.ops.push(Op::ScrollTo(section.to_string()));
    }

    fn set_active_nav(&mut self, section: Option<&str>) {
        self.ops.push(Op::ActiveNav(section.map(str::to_string)));
    }

    fn set_progress(&mut self, percent: f64) {
        self.ops.push(Op::Progress(percent));
    }

    fn reveal(&mut self, element: &str) {
        self.ops.push(Op::Reveal(element.to_string()));
    }

    fn unobserve(&mut self, element: &str) {
        self.ops.push(Op::Unobserve(element.to_string()));
    }

    fn spawn_ripple(&mut self, button: &str, ripple: &Ripple) {
        self.ops.push(Op::Ripple(button.to_string(), *ripple));
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.ops.push(Op::Theme(theme));
    }
}

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 900.0),
        SectionBounds::new("about", 900.0, 700.0),
        SectionBounds::new("projects", 1600.0, 1400.0),
        SectionBounds::new("contact", 3000.0, 600.0),
    ]
}

fn page() -> Page<RecordingSurface, MemoryStore> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let theme = ThemePreference::load(MemoryStore::default(), false);
    let mut page = Page::new(&ScrollConfig::default(), RecordingSurface::default(), theme);
    page.set_sections(sections());
    page
}

fn scroll(scroll_y: f64) -> PageEvent {
    PageEvent::Scroll(ScrollMetrics {
        scroll_y,
        scroll_height: 3600.0,
        viewport_height: 1000.0,
    })
}

#[test]
fn test_attach_registers_every_kind() {
    let mut bus = EventBus::new();
    let _page = page().attach(&mut bus);

    for kind in [
        EventKind::Scroll,
        EventKind::AnchorClick,
        EventKind::Intersection,
        EventKind::ButtonPress,
        EventKind::ThemeToggle,
    ] {
        assert_eq!(bus.handler_count(kind), 1);
    }
}

#[test]
fn test_scroll_updates_progress_and_active_nav() {
    let mut bus = EventBus::new();
    let page = page().attach(&mut bus);

    bus.dispatch(&scroll(0.0));
    bus.dispatch(&scroll(1300.0));
    bus.dispatch(&scroll(1310.0));

    let page = page.borrow();
    assert_eq!(page.active(), Some("about"));

    let ops = &page.surface().ops;
    assert_eq!(page.surface().count(|op| matches!(op, Op::Progress(_))), 3);
    assert!(ops.contains(&Op::Progress(50.0)));
    // nav is only touched when the active section changes
    assert_eq!(
        ops.iter()
            .filter(|op| matches!(op, Op::ActiveNav(_)))
            .cloned()
            .collect::<Vec<_>>(),
        vec![
            Op::ActiveNav(Some("home".to_string())),
            Op::ActiveNav(Some("about".to_string())),
        ]
    );
}

#[test]
fn test_anchor_click_scrolls_and_highlights() {
    let mut bus = EventBus::new();
    let page = page().attach(&mut bus);

    let dispatch = bus.dispatch(&PageEvent::AnchorClick {
        href: "#projects".to_string(),
    });
    assert!(dispatch.default_prevented);

    let dispatch = bus.dispatch(&PageEvent::AnchorClick {
        href: "#missing".to_string(),
    });
    assert!(!dispatch.default_prevented);

    let dispatch = bus.dispatch(&PageEvent::AnchorClick {
        href: "https://github.com".to_string(),
    });
    assert!(!dispatch.default_prevented);

    let page = page.borrow();
    assert_eq!(page.active(), Some("projects"));
    assert_eq!(
        page.surface().count(|op| *op == Op::ScrollTo("projects".to_string())),
        1
    );
    assert_eq!(page.surface().count(|op| matches!(op, Op::ScrollTo(_))), 1);
}

#[test]
fn test_reveal_happens_once_per_element() {
    let mut page = page();
    page.observe("card-1");
    page.observe("card-2");

    let visible = Rect::new(0.0, 400.0, 300.0, 200.0);
    let below = Rect::new(0.0, 1400.0, 300.0, 200.0);

    assert!(page.on_intersection("card-1", &visible, 1000.0));
    page.handle(&PageEvent::Intersection {
        element: "card-1".to_string(),
        rect: visible,
        viewport_height: 1000.0,
    });
    page.handle(&PageEvent::Intersection {
        element: "card-2".to_string(),
        rect: below,
        viewport_height: 1000.0,
    });

    let surface = page.surface();
    assert_eq!(surface.count(|op| *op == Op::Reveal("card-1".to_string())), 1);
    assert_eq!(surface.count(|op| *op == Op::Unobserve("card-1".to_string())), 1);
    assert_eq!(surface.count(|op| *op == Op::Reveal("card-2".to_string())), 0);
    assert_eq!(page.reveal_tracker().pending(), 1);
}

#[test]
fn test_button_press_spawns_ripple() {
    let mut bus = EventBus::new();
    let page = page().attach(&mut bus);

    bus.dispatch(&PageEvent::ButtonPress {
        button: "send".to_string(),
        pointer: Point::new(60.0, 20.0),
        rect: Rect::new(0.0, 0.0, 120.0, 40.0),
    });

    let page = page.borrow();
    match page.surface().ops.last() {
        Some(Op::Ripple(button, ripple)) => {
            assert_eq!(button, "send");
            assert_eq!(ripple.size, 120.0);
            assert_eq!((ripple.x, ripple.y), (0.0, -40.0));
        }
        other => panic!("expected ripple, got {:?}", other),
    }
}

#[test]
fn test_theme_toggle_applies_and_persists() {
    let mut bus = EventBus::new();
    let page = page().attach(&mut bus);

    bus.dispatch(&PageEvent::ThemeToggle);

    let page = page.borrow();
    assert_eq!(page.theme(), Theme::Dark);
    assert_eq!(
        page.surface().ops.first(),
        Some(&Op::Theme(Theme::Light))
    );
    assert_eq!(page.surface().ops.last(), Some(&Op::Theme(Theme::Dark)));
}

#[test]
fn test_saved_theme_applied_on_start() {
    let mut store = MemoryStore::default();
    store.set(THEME_KEY, "dark");
    let page = Page::new(
        &ScrollConfig::default(),
        RecordingSurface::default(),
        ThemePreference::load(store, false),
    );
    assert_eq!(page.surface().ops, vec![Op::Theme(Theme::Dark)]);
}
