#![forbid(unsafe_code)]

//! Saving and restoring open/closed state across sessions.
//!
//! The snapshot covers the durable shape of the widget: policies plus each
//! section's title, open flag, alignment, and divider visibility. Locks,
//! animation progress, and interaction state are transient and never
//! persisted; restore lands every section settled at its final height.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accordion::Accordion;
use crate::policy::Policies;
use crate::section::{Alignment, Section};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Durable widget state. Serializable with any serde format the host picks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub single_expand: bool,
    pub at_least_one_open: bool,
    pub sections: Vec<SectionSnapshot>,
}

/// Durable per-section state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    pub title: String,
    pub open: bool,
    pub align: Alignment,
    pub divider: bool,
}

/// Why a snapshot was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreError {
    /// The snapshot was written by an unknown format version.
    UnsupportedVersion(u32),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion(version) => {
                write!(
                    f,
                    "unsupported snapshot version {version} (expected {SNAPSHOT_VERSION})"
                )
            }
        }
    }
}

impl Error for RestoreError {}

impl Accordion {
    /// Capture the durable state.
    #[must_use]
    pub fn save_state(&self) -> Snapshot {
        let (sections, policies) = self.snapshot_state();
        Snapshot {
            version: SNAPSHOT_VERSION,
            single_expand: policies.single_expand(),
            at_least_one_open: policies.at_least_one_open(),
            sections: sections
                .iter()
                .map(|s| SectionSnapshot {
                    title: s.title.clone(),
                    open: s.open,
                    align: s.align,
                    divider: s.divider,
                })
                .collect(),
        }
    }

    /// Replace the whole widget state with a snapshot. The section list is
    /// rebuilt from scratch; open flags are applied directly, so no policy
    /// cascades, vetoes, or animations run, and no events are emitted.
    /// Restored sections start with a content height of zero until the host
    /// sets one.
    ///
    /// # Errors
    ///
    /// Returns [`RestoreError::UnsupportedVersion`] (leaving the widget
    /// untouched) when the snapshot version is unknown.
    pub fn restore_state(&mut self, snapshot: &Snapshot) -> Result<(), RestoreError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RestoreError::UnsupportedVersion(snapshot.version));
        }
        let sections = snapshot
            .sections
            .iter()
            .map(|entry| {
                let mut s = Section::new(entry.title.clone());
                s.align = entry.align;
                s.divider = entry.divider;
                s.open = entry.open;
                s
            })
            .collect();
        let policies = Policies {
            single_expand: snapshot.single_expand,
            at_least_one_open: snapshot.at_least_one_open,
        };
        debug!(sections = snapshot.sections.len(), "state restored");
        self.replace_state(sections, policies);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accordion_core::geometry::Rect;

    fn accordion() -> Accordion {
        let mut acc = Accordion::new();
        acc.push("alpha");
        acc.push("beta");
        acc.push("gamma");
        for i in 0..3 {
            acc.set_content_height(i, 5);
        }
        acc.layout(Rect::from_size(40, 30));
        acc
    }

    #[test]
    fn round_trip_preserves_shape_and_policies() {
        let mut acc = accordion();
        acc.open(1, false);
        acc.set_single_expand(true);
        acc.set_divider_visible(0, true);
        acc.set_header_alignment(2, Alignment::Center);
        let snapshot = acc.save_state();

        let mut restored = Accordion::new();
        restored.layout(Rect::from_size(40, 30));
        restored.restore_state(&snapshot).unwrap();
        assert_eq!(restored.len(), 3);
        assert_eq!(restored.title(1), "beta");
        assert!(restored.is_open(1));
        assert!(!restored.is_open(0));
        assert!(restored.policies().single_expand());
        assert_eq!(restored.section(2).alignment(), Alignment::Center);
        assert!(restored.section(0).divider_visible());
        assert_eq!(restored.save_state(), snapshot);
    }

    #[test]
    fn restore_lands_settled() {
        let mut acc = accordion();
        acc.open(0, true);
        acc.tick();
        let snapshot = acc.save_state();
        acc.restore_state(&snapshot).unwrap();
        assert!(!acc.is_animating());
        assert_eq!(acc.section(0).current_height(), acc.section(0).target_height());
    }

    #[test]
    fn unknown_version_is_refused_and_leaves_state_alone() {
        let mut acc = accordion();
        acc.open(2, false);
        let mut snapshot = acc.save_state();
        snapshot.version = 99;
        let err = acc.restore_state(&snapshot).unwrap_err();
        assert_eq!(err, RestoreError::UnsupportedVersion(99));
        assert_eq!(acc.len(), 3);
        assert!(acc.is_open(2));
    }

    #[test]
    fn locks_are_not_persisted() {
        let mut acc = accordion();
        acc.open(0, false);
        acc.set_locked(0, true);
        let snapshot = acc.save_state();
        acc.restore_state(&snapshot).unwrap();
        assert!(acc.is_open(0));
        assert!(!acc.is_locked(0));
    }

    #[test]
    fn snapshot_survives_json() {
        let mut acc = accordion();
        acc.open(1, false);
        let snapshot = acc.save_state();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn restore_does_not_emit_events() {
        let mut acc = accordion();
        acc.open(0, false);
        let snapshot = acc.save_state();
        acc.drain_events();
        acc.restore_state(&snapshot).unwrap();
        assert!(acc.drain_events().is_empty());
    }
}
