#![forbid(unsafe_code)]

//! Ticket-based height animation.
//!
//! A section's body height converges on a target via fixed-interval ticks.
//! Each tick moves the current height by a fraction of the remaining
//! distance (an exponential ease-out approach, not linear interpolation)
//! and settles exactly on the target once the remaining distance is within
//! [`SNAP_THRESHOLD`].
//!
//! Cancellation is purely generational: every animation-affecting change
//! bumps the section's [`Ticket`], and a [`ScheduledTick`] fires only while
//! the ticket it captured still matches. There is no cancel list and no
//! cancellable-timer primitive; superseded continuations become inert.
//!
//! # Invariants
//!
//! 1. A step never overshoots the target.
//! 2. A step always moves at least one cell toward the target (until the
//!    snap window), so the remaining distance strictly decreases.
//! 3. A zero duration settles immediately.

use std::time::Duration;

/// Fixed tick interval (~60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Remaining distance (in cells) at which the animation settles exactly on
/// the target instead of stepping again.
pub const SNAP_THRESHOLD: u16 = 2;

/// Per-section animation generation counter.
///
/// Monotonically increasing; a scheduled continuation is valid only while
/// the ticket it captured matches the section's current ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    /// Invalidate all outstanding continuations and return the new ticket.
    pub fn bump(&mut self) -> Ticket {
        self.0 += 1;
        *self
    }
}

/// A captured animation continuation: "advance `section`'s height on the
/// next tick, provided `ticket` is still current".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    /// Index of the section at scheduling time.
    pub section: usize,
    /// Ticket captured at scheduling time.
    pub ticket: Ticket,
}

/// Outcome of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightStep {
    /// Within the snap window (or instant): set the height to the target and
    /// stop animating. Terminal for this run.
    Settle(u16),
    /// Advance to the given height and reschedule another tick.
    Advance(u16),
}

/// Compute one tick of the height approach.
///
/// The per-tick step is `round(delta * FRAME_INTERVAL / duration)` where
/// `duration` is `opening` when growing and `closing` when shrinking. The
/// step is clamped to at least one cell toward the target (terminal heights
/// are small integers and a rounded fraction can stall above the snap
/// window) and never past it.
#[must_use]
pub fn advance(current: u16, target: u16, opening: Duration, closing: Duration) -> HeightStep {
    let delta = i32::from(target) - i32::from(current);
    if delta.unsigned_abs() <= u32::from(SNAP_THRESHOLD) {
        return HeightStep::Settle(target);
    }

    let duration = if delta > 0 { opening } else { closing };
    if duration.is_zero() {
        return HeightStep::Settle(target);
    }

    let fraction = FRAME_INTERVAL.as_secs_f64() / duration.as_secs_f64();
    let raw = (f64::from(delta) * fraction).round() as i32;
    let magnitude = raw.unsigned_abs().clamp(1, delta.unsigned_abs()) as i32;
    let step = if delta > 0 { magnitude } else { -magnitude };

    let next = i32::from(current) + step;
    debug_assert!((0..=i32::from(u16::MAX)).contains(&next));
    HeightStep::Advance(next as u16)
}
