#![forbid(unsafe_code)]

//! An animated accordion (collapsible sections) widget for cell grids.
//!
//! An [`Accordion`] stacks titled sections vertically; each section's body
//! grows and shrinks with an eased, cancellable animation driven by a
//! fixed-interval [`tick`](Accordion::tick). Open-state policies
//! (single-expand, at-least-one-open), per-section locks, a veto hook, and
//! durable state snapshots are built in. Rendering goes through the
//! backend-agnostic [`Surface`] trait.
//!
//! ```
//! use accordion_core::geometry::Rect;
//! use accordion_widget::Accordion;
//!
//! let mut acc = Accordion::new();
//! let general = acc.push("General");
//! let advanced = acc.push("Advanced");
//! acc.set_content_height(general, 6);
//! acc.set_content_height(advanced, 10);
//! acc.set_single_expand(true);
//! acc.layout(Rect::from_size(50, 24));
//!
//! acc.open(general, false);
//! acc.open(advanced, false); // evicts "General"
//! assert!(!acc.is_open(general));
//! assert!(acc.is_open(advanced));
//! ```

pub mod accordion;
mod interaction;
mod layout;
pub mod persist;
pub mod policy;
pub mod section;
pub mod style;
pub mod surface;

pub use accordion::{Accordion, AccordionEvent};
pub use persist::{RestoreError, SectionSnapshot, Snapshot, SNAPSHOT_VERSION};
pub use policy::Policies;
pub use section::{Alignment, LockMode, Section};
pub use style::{AccordionStyle, Color, IconSet};
pub use surface::Surface;
