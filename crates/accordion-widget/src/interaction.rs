#![forbid(unsafe_code)]

//! Pointer and keyboard handling over the arranged header rectangles.
//!
//! Pointer toggling follows the press-capture protocol: a press on a
//! header captures it, movement arms or disarms depending on whether the
//! pointer is still over the pressed header, and only an armed release
//! toggles. Hover tracking is frozen while a press is captured.

use accordion_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::section::Section;

/// What an input event asks the container to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Toggle(usize),
}

/// Hover, press-capture, and keyboard focus state.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct InteractionState {
    hot: Option<usize>,
    pressed: Option<usize>,
    focused: Option<usize>,
}

pub(crate) fn hit_test(sections: &[Section], x: u16, y: u16) -> Option<usize> {
    sections.iter().position(|s| s.header_rect.contains(x, y))
}

impl InteractionState {
    #[must_use]
    pub(crate) fn hot(&self) -> Option<usize> {
        self.hot
    }

    #[must_use]
    pub(crate) fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    #[must_use]
    pub(crate) fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, index: Option<usize>) {
        self.focused = index;
    }

    /// A structural mutation shifted section indices: drop hover and press
    /// capture entirely (the pointer re-establishes them on its next move)
    /// and clamp focus to the surviving range.
    pub(crate) fn sections_changed(&mut self, sections: &mut [Section], len: usize) {
        self.hot = None;
        self.pressed = None;
        for section in sections.iter_mut() {
            section.hot = false;
            section.pressed = false;
        }
        if self.focused.is_some_and(|i| i >= len) {
            self.focused = None;
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `(consumed, action)`.
    pub(crate) fn handle_mouse(
        &mut self,
        sections: &mut [Section],
        event: MouseEvent,
    ) -> (bool, Option<Action>) {
        let hit = hit_test(sections, event.x, event.y);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(i) = hit {
                    self.set_hot(sections, Some(i));
                    self.pressed = Some(i);
                    sections[i].pressed = true;
                    self.focused = Some(i);
                    (true, None)
                } else {
                    (false, None)
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(p) = self.pressed {
                    // Captured: arm while over the pressed header, disarm
                    // elsewhere. Hover does not follow the pointer.
                    sections[p].pressed = hit == Some(p);
                    (true, None)
                } else {
                    self.set_hot(sections, hit);
                    (hit.is_some(), None)
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(p) = self.pressed.take() {
                    let armed = sections[p].pressed && hit == Some(p);
                    sections[p].pressed = false;
                    self.set_hot(sections, hit);
                    (true, armed.then_some(Action::Toggle(p)))
                } else {
                    (false, None)
                }
            }
            _ => (false, None),
        }
    }

    /// The pointer left the widget entirely.
    pub(crate) fn pointer_left(&mut self, sections: &mut [Section]) {
        if self.pressed.is_none() {
            self.set_hot(sections, None);
        }
    }

    /// Returns `(consumed, action)`.
    pub(crate) fn handle_key(
        &mut self,
        sections: &[Section],
        event: KeyEvent,
    ) -> (bool, Option<Action>) {
        if sections.is_empty() {
            return (false, None);
        }
        let last = sections.len() - 1;
        match event.code {
            KeyCode::Up => match self.focused {
                Some(i) if i > 0 => {
                    self.focused = Some(i - 1);
                    (true, None)
                }
                _ => (false, None),
            },
            KeyCode::Down => match self.focused {
                Some(i) if i < last => {
                    self.focused = Some(i + 1);
                    (true, None)
                }
                _ => (false, None),
            },
            KeyCode::Home => {
                self.focused = Some(0);
                (true, None)
            }
            KeyCode::End => {
                self.focused = Some(last);
                (true, None)
            }
            KeyCode::Enter => (self.focused.is_some(), self.focused.map(Action::Toggle)),
            KeyCode::Char(' ') => (self.focused.is_some(), self.focused.map(Action::Toggle)),
            _ => (false, None),
        }
    }

    fn set_hot(&mut self, sections: &mut [Section], next: Option<usize>) {
        if self.hot == next {
            return;
        }
        if let Some(old) = self.hot {
            sections[old].hot = false;
        }
        if let Some(new) = next {
            sections[new].hot = true;
        }
        self.hot = next;
    }
}
