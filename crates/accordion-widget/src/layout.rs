#![forbid(unsafe_code)]

//! Vertical stacking pass.
//!
//! Layout is a pure function of the section list, the area, and the style
//! tokens: no section state changes here besides the cached rectangles.
//! Mid-animation heights flow straight through, so re-arranging after every
//! tick is what makes the motion visible.

use accordion_core::geometry::{Rect, Sides};

use crate::section::Section;
use crate::style::AccordionStyle;

/// Stack headers and bodies top to bottom inside `area`, caching the
/// header, icon, and body rectangle on each section. Returns the total
/// height consumed, including the border; content past the bottom of
/// `area` keeps its coordinates and is the caller's scrolling problem.
pub(crate) fn arrange(sections: &mut [Section], area: Rect, style: &AccordionStyle) -> u16 {
    let inset = area.inner(Sides::all(style.border_width));
    let mut y = inset.y;
    let last = sections.len().saturating_sub(1);
    // The icon collapses to zero width when the header cannot hold the
    // left padding plus the glyph cell.
    let icon_width = if style.header_pad_left.saturating_add(style.icon_width) <= inset.width {
        style.icon_width
    } else {
        0
    };
    for (i, section) in sections.iter_mut().enumerate() {
        section.header_rect = Rect::new(inset.x, y, inset.width, style.header_height);
        section.icon_rect = Rect::new(
            inset.x.saturating_add(style.header_pad_left),
            y.saturating_add(style.header_height.saturating_sub(1) / 2),
            icon_width,
            1,
        );
        y = y.saturating_add(style.header_height);
        section.body_rect = Rect::new(inset.x, y, inset.width, section.current_height);
        y = y.saturating_add(section.current_height);
        if i != last {
            y = y.saturating_add(style.section_gap);
        }
    }
    (y - area.y).saturating_add(style.border_width)
}
