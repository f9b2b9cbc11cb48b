#![forbid(unsafe_code)]

//! Per-section state record.

use accordion_core::animation::Ticket;
use accordion_core::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of the header title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Lock mode of a section.
///
/// A locked section refuses toggles from every path, including policy
/// cascades; locking records the section's state at lock time and freezes
/// it until unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockMode {
    #[default]
    Unlocked,
    /// Frozen open: close requests and cascade evictions are refused.
    LockedOpen,
    /// Frozen closed: open requests are refused.
    LockedClosed,
}

/// One collapsible section: a header row plus a body whose height is the
/// animated quantity.
///
/// # Invariants
///
/// Whenever `animating` is false, `current_height == target_height`.
/// Layout rectangles are only meaningful after an arrange pass.
#[derive(Debug, Clone)]
pub struct Section {
    pub(crate) title: String,
    pub(crate) align: Alignment,
    pub(crate) divider: bool,
    pub(crate) open: bool,
    pub(crate) lock: LockMode,

    /// Natural body height in rows; the target of a full open.
    pub(crate) content_height: u16,
    pub(crate) current_height: u16,
    pub(crate) target_height: u16,
    pub(crate) animating: bool,
    pub(crate) ticket: Ticket,

    pub(crate) hot: bool,
    pub(crate) pressed: bool,

    pub(crate) header_rect: Rect,
    pub(crate) body_rect: Rect,
    pub(crate) icon_rect: Rect,
}

impl Section {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            align: Alignment::default(),
            divider: false,
            open: false,
            lock: LockMode::default(),
            content_height: 0,
            current_height: 0,
            target_height: 0,
            animating: false,
            ticket: Ticket::default(),
            hot: false,
            pressed: false,
            header_rect: Rect::default(),
            body_rect: Rect::default(),
            icon_rect: Rect::default(),
        }
    }

    /// Cancel any in-flight animation and pin the body height.
    pub(crate) fn settle(&mut self, height: u16) {
        self.ticket.bump();
        self.current_height = height;
        self.target_height = height;
        self.animating = false;
    }

    // --- read accessors -------------------------------------------------

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.align
    }

    #[must_use]
    pub fn divider_visible(&self) -> bool {
        self.divider
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn lock(&self) -> LockMode {
        self.lock
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock != LockMode::Unlocked
    }

    #[must_use]
    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    #[must_use]
    pub fn current_height(&self) -> u16 {
        self.current_height
    }

    #[must_use]
    pub fn target_height(&self) -> u16 {
        self.target_height
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[must_use]
    pub fn is_hot(&self) -> bool {
        self.hot
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Header rectangle from the last arrange pass.
    #[must_use]
    pub fn header_rect(&self) -> Rect {
        self.header_rect
    }

    /// Body rectangle from the last arrange pass; its height tracks
    /// `current_height`.
    #[must_use]
    pub fn body_rect(&self) -> Rect {
        self.body_rect
    }
}
