#![forbid(unsafe_code)]

//! Core primitives for the accordion widget: geometry, canonical input
//! events, and the ticket-based height animation driver.

pub mod animation;
pub mod event;
pub mod geometry;
