#![forbid(unsafe_code)]

//! Open-state policies and the queries they run over the section list.

use crate::section::{LockMode, Section};

/// The two orthogonal open-state policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Policies {
    /// At most one section open at a time; opening one evicts the rest.
    pub(crate) single_expand: bool,
    /// Closing the last open section is refused.
    pub(crate) at_least_one_open: bool,
}

impl Policies {
    #[must_use]
    pub fn single_expand(&self) -> bool {
        self.single_expand
    }

    #[must_use]
    pub fn at_least_one_open(&self) -> bool {
        self.at_least_one_open
    }
}

pub(crate) fn open_count(sections: &[Section]) -> usize {
    sections.iter().filter(|s| s.open).count()
}

pub(crate) fn first_open(sections: &[Section]) -> Option<usize> {
    sections.iter().position(|s| s.open)
}

/// Sections a single-expand cascade closes when `keep` opens: every other
/// open section that is not frozen open.
pub(crate) fn cascade_victims(sections: &[Section], keep: usize) -> Vec<usize> {
    sections
        .iter()
        .enumerate()
        .filter(|(i, s)| *i != keep && s.open && s.lock != LockMode::LockedOpen)
        .map(|(i, _)| i)
        .collect()
}

/// Which section an at-least-one-open repair should open, or `None` when
/// no repair is needed (something is already open, or the list is empty).
///
/// `excluded` marks a section about to disappear; the repair prefers index
/// 0 and falls back to 1 only when 0 itself is excluded.
pub(crate) fn repair_target(sections: &[Section], excluded: Option<usize>) -> Option<usize> {
    let any_open = sections
        .iter()
        .enumerate()
        .any(|(i, s)| s.open && Some(i) != excluded);
    if any_open {
        return None;
    }
    match excluded {
        Some(0) if sections.len() > 1 => Some(1),
        Some(0) => None,
        _ if !sections.is_empty() => Some(0),
        _ => None,
    }
}
