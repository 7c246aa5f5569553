//! Smooth-scroll navigation
//!
//! Anchor links scroll the page to their target section, offset by the
//! fixed navigation bar so headings are not hidden underneath it.

use vitrine_dom::{Document, NodeId};

/// Height of the fixed navigation bar, in pixels.
pub const HEADER_OFFSET: f32 = 80.0;

/// Scroll to the element an `#id` fragment names. Returns false (and
/// leaves the scroll position alone) for non-fragment hrefs and
/// unknown targets.
pub fn scroll_to_href(doc: &mut Document, href: &str) -> bool {
    let Some(target_id) = href.strip_prefix('#') else {
        return false;
    };
    if target_id.is_empty() {
        return false;
    }
    let Some(target) = doc.get_by_id(target_id) else {
        return false;
    };
    doc.scroll_to(doc.offset_top(target) - HEADER_OFFSET);
    true
}

/// Follow an anchor element's own `href`.
pub fn activate_anchor(doc: &mut Document, anchor: NodeId) -> bool {
    let Some(href) = doc.attr(anchor, "href").map(str::to_string) else {
        return false;
    };
    scroll_to_href(doc, &href)
}
