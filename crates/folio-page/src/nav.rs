//! In-page navigation and active section tracking

use crate::geometry::SectionBounds;

/// Section id an in-page link points at
///
/// `#about` → `about`. Bare `#`, empty hrefs and links to other pages
/// return `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some(id)
}

/// Section whose top edge has scrolled past `offset` above the viewport top
///
/// Sections are scanned in document order and the last match wins, so a
/// later section overrides earlier ones at the same scroll position.
/// Returns `None` while scrolled above the first section.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - offset)
        .last()
        .map(|section| section.id.as_str())
}
