#![forbid(unsafe_code)]

//! Style tokens for the accordion.
//!
//! [`AccordionStyle`] is a plain token struct. A process-wide immutable
//! default is built once ([`AccordionStyle::default_ref`]) and copied into
//! each instance, which may then be overridden per instance; the shared
//! default is never mutated after construction.

use std::sync::OnceLock;
use std::time::Duration;

/// An opaque RGB color the render surface consumes verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Color {
    /// Create a new RGB color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Glyphs for the header state icon.
///
/// The icon provider is pluggable: supply any single-cell glyphs for the
/// three states. The locked glyph replaces the chevron entirely while a
/// section is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    /// Glyph for a closed, unlocked section.
    pub closed: char,
    /// Glyph for an open, unlocked section.
    pub open: char,
    /// Glyph for a locked section (either direction).
    pub locked: char,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            closed: '▸',
            open: '▾',
            locked: '⚿',
        }
    }
}

/// Style tokens: metrics in cells, colors, and the two directional
/// animation durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionStyle {
    /// Header row height.
    pub header_height: u16,
    /// Cells between the left edge and the icon.
    pub header_pad_left: u16,
    /// Cells reserved at the right edge of the header.
    pub header_pad_right: u16,
    /// Icon cell width.
    pub icon_width: u16,
    /// Cells between icon and title.
    pub icon_text_gap: u16,
    /// Blank rows between a body and the next header.
    pub section_gap: u16,
    /// Divider column width (0 disables all dividers).
    pub divider_thickness: u16,
    /// Outer border width (0 disables the border).
    pub border_width: u16,

    /// Widget background.
    pub background: Color,
    /// Header background.
    pub header_bg: Color,
    /// Header background while hovered or pressed.
    pub header_bg_hover: Color,
    /// Header text and icon color.
    pub header_fg: Color,
    /// Header text and icon color while hovered or pressed.
    pub header_fg_hover: Color,
    /// Body background.
    pub body_bg: Color,
    /// Divider color.
    pub divider: Color,
    /// Outer border color.
    pub border: Color,

    /// Duration of a full open (grow) animation.
    pub open_duration: Duration,
    /// Duration of a full close (shrink) animation. Typically faster.
    pub close_duration: Duration,
}

impl Default for AccordionStyle {
    fn default() -> Self {
        Self {
            header_height: 1,
            header_pad_left: 1,
            header_pad_right: 1,
            icon_width: 1,
            icon_text_gap: 1,
            section_gap: 0,
            divider_thickness: 1,
            border_width: 0,
            background: Color::rgb(16, 16, 16),
            header_bg: Color::rgb(38, 38, 38),
            header_bg_hover: Color::rgb(58, 58, 58),
            header_fg: Color::rgb(220, 220, 220),
            header_fg_hover: Color::rgb(255, 255, 255),
            body_bg: Color::rgb(24, 24, 24),
            divider: Color::rgb(90, 90, 90),
            border: Color::rgb(110, 110, 110),
            open_duration: Duration::from_millis(160),
            close_duration: Duration::from_millis(80),
        }
    }
}

impl AccordionStyle {
    /// The process-wide default style, constructed on first use.
    #[must_use]
    pub fn default_ref() -> &'static AccordionStyle {
        static DEFAULT: OnceLock<AccordionStyle> = OnceLock::new();
        DEFAULT.get_or_init(AccordionStyle::default)
    }
}
