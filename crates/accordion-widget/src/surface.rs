#![forbid(unsafe_code)]

//! Render contract and the paint pass.
//!
//! The accordion draws through the [`Surface`] trait instead of a concrete
//! backend, so the same paint pass runs against a terminal buffer, a test
//! recorder, or any cell grid the host provides. Bodies are painted as
//! background only; section content is the host's job, clipped to
//! [`Section::body_rect`](crate::section::Section::body_rect).

use std::borrow::Cow;

use accordion_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::accordion::Accordion;
use crate::section::{Alignment, Section};
use crate::style::{AccordionStyle, Color};

/// A cell grid the accordion can paint on.
pub trait Surface {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a string starting at `(x, y)`. The surface may clip.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Color);

    /// Draw a single glyph at `(x, y)`.
    fn draw_glyph(&mut self, x: u16, y: u16, glyph: char, fg: Color);
}

impl Accordion {
    /// Paint the whole widget: background, border, then every header and
    /// body in order. Uses the rectangles from the last layout pass.
    pub fn render(&self, surface: &mut dyn Surface) {
        let area = self.area();
        if area.is_empty() {
            return;
        }
        let style = self.style();
        surface.fill_rect(area, style.background);
        draw_border(surface, area, style);
        for section in self.sections() {
            draw_header(surface, section, style, self.icons());
            if !section.body_rect.is_empty() {
                surface.fill_rect(section.body_rect, style.body_bg);
            }
        }
    }
}

fn draw_border(surface: &mut dyn Surface, area: Rect, style: &AccordionStyle) {
    let bw = style.border_width;
    if bw == 0 {
        return;
    }
    surface.fill_rect(Rect::new(area.x, area.y, area.width, bw), style.border);
    surface.fill_rect(
        Rect::new(area.x, area.bottom().saturating_sub(bw), area.width, bw),
        style.border,
    );
    surface.fill_rect(Rect::new(area.x, area.y, bw, area.height), style.border);
    surface.fill_rect(
        Rect::new(area.right().saturating_sub(bw), area.y, bw, area.height),
        style.border,
    );
}

fn draw_header(
    surface: &mut dyn Surface,
    section: &Section,
    style: &AccordionStyle,
    icons: crate::style::IconSet,
) {
    let header = section.header_rect;
    if header.is_empty() {
        return;
    }
    let active = section.hot || section.pressed;
    let bg = if active {
        style.header_bg_hover
    } else {
        style.header_bg
    };
    let ink = if active {
        style.header_fg_hover
    } else {
        style.header_fg
    };
    surface.fill_rect(header, bg);

    let glyph = if section.is_locked() {
        icons.locked
    } else if section.open {
        icons.open
    } else {
        icons.closed
    };
    let icon = section.icon_rect;
    if !icon.is_empty() {
        surface.draw_glyph(icon.x, icon.y, glyph, ink);
    }

    let divider_cols = if section.divider && style.divider_thickness > 0 {
        // One gap cell between title span and divider.
        style.divider_thickness.saturating_add(1)
    } else {
        0
    };
    let text_x = icon.right().saturating_add(style.icon_text_gap);
    let right_limit = header
        .right()
        .saturating_sub(style.header_pad_right)
        .saturating_sub(divider_cols);
    let avail = right_limit.saturating_sub(text_x);
    if avail > 0 && !section.title.is_empty() {
        let text = ellipsize(&section.title, avail);
        let width = u16::try_from(UnicodeWidthStr::width(text.as_ref())).unwrap_or(avail);
        let x = match section.align {
            Alignment::Left => text_x,
            Alignment::Center => text_x + avail.saturating_sub(width) / 2,
            Alignment::Right => text_x + avail.saturating_sub(width),
        };
        surface.draw_text(x, icon.y, &text, ink);
    }

    if divider_cols > 0 {
        let dx = header
            .right()
            .saturating_sub(style.header_pad_right)
            .saturating_sub(style.divider_thickness);
        surface.fill_rect(
            Rect::new(dx, header.y, style.divider_thickness, header.height),
            style.divider,
        );
    }
}

/// Truncate on a grapheme boundary and append `…` when `text` is wider than
/// `max_width` columns.
fn ellipsize(text: &str, max_width: u16) -> Cow<'_, str> {
    let max = usize::from(max_width);
    if UnicodeWidthStr::width(text) <= max {
        return Cow::Borrowed(text);
    }
    if max == 1 {
        return Cow::Owned("…".to_string());
    }
    let budget = max - 1;
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}
