#![forbid(unsafe_code)]

//! The accordion container: section list, policy enforcement, animation
//! driving, and event dispatch.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use accordion_core::animation::{self, HeightStep, ScheduledTick};
use accordion_core::event::Event;
use accordion_core::geometry::Rect;
use tracing::{debug, trace};

use crate::interaction::{Action, InteractionState};
use crate::policy::{self, Policies};
use crate::section::{Alignment, LockMode, Section};
use crate::style::{AccordionStyle, IconSet};

/// Completion notification for a committed transition.
///
/// Emitted when the open flag commits, not when the animation finishes;
/// drained in order via [`Accordion::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionEvent {
    Opened(usize),
    Closed(usize),
}

type BeforeToggle = Box<dyn FnMut(usize) -> bool>;

/// A vertical stack of collapsible sections.
///
/// Sections are addressed by index; indices are stable between structural
/// mutations. All toggle paths funnel through the same gate order: same-state
/// no-op, lock check, policy check, veto hook, commit.
///
/// # Invariants
///
/// * When a section is not animating, its current height equals its target.
/// * Under single-expand, at most one unlocked-open section is open.
/// * Under at-least-one-open, a close that would leave zero open is refused.
pub struct Accordion {
    sections: Vec<Section>,
    policies: Policies,
    style: AccordionStyle,
    icons: IconSet,
    interaction: InteractionState,
    animation_enabled: bool,
    ticks: VecDeque<ScheduledTick>,
    events: Vec<AccordionEvent>,
    before_toggle: Option<BeforeToggle>,
    area: Rect,
}

impl fmt::Debug for Accordion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accordion")
            .field("sections", &self.sections.len())
            .field("policies", &self.policies)
            .field("animation_enabled", &self.animation_enabled)
            .field("pending_ticks", &self.ticks.len())
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new()
    }
}

impl Accordion {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            policies: Policies::default(),
            style: AccordionStyle::default_ref().clone(),
            icons: IconSet::default(),
            interaction: InteractionState::default(),
            animation_enabled: true,
            ticks: VecDeque::new(),
            events: Vec::new(),
            before_toggle: None,
            area: Rect::default(),
        }
    }

    // --- section list ---------------------------------------------------

    /// Append a closed, unlocked section. Returns its index.
    pub fn push(&mut self, title: impl Into<String>) -> usize {
        let at = self.sections.len();
        self.insert(at, title);
        at
    }

    /// Insert a closed, unlocked section at `at`, shifting later sections.
    ///
    /// # Panics
    ///
    /// Panics if `at > len()`.
    pub fn insert(&mut self, at: usize, title: impl Into<String>) {
        assert!(
            at <= self.sections.len(),
            "insert index {at} out of range (len {})",
            self.sections.len()
        );
        self.sections.insert(at, Section::new(title));
        for tick in &mut self.ticks {
            if tick.section >= at {
                tick.section += 1;
            }
        }
        let len = self.sections.len();
        self.interaction.sections_changed(&mut self.sections, len);
        self.relayout();
    }

    /// Remove the section at `index`. Any in-flight animation for it is
    /// cancelled first. Under at-least-one-open, removing the last open
    /// section immediately opens the first remaining one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) {
        self.assert_index(index);
        // Pick the repair target while the doomed section is still present,
        // excluding it from the survivor scan.
        let repair = if self.policies.at_least_one_open() {
            policy::repair_target(&self.sections, Some(index))
        } else {
            None
        };
        self.sections[index].ticket.bump();
        self.ticks.retain(|t| t.section != index);
        for tick in &mut self.ticks {
            if tick.section > index {
                tick.section -= 1;
            }
        }
        self.sections.remove(index);
        let len = self.sections.len();
        self.interaction.sections_changed(&mut self.sections, len);
        if let Some(target) = repair {
            let target = if target > index { target - 1 } else { target };
            debug!(section = target, "reopening after removal left none open");
            self.open_inner(target, false);
        }
        self.relayout();
    }

    /// Remove every section and cancel all pending animation work.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.ticks.clear();
        self.events.clear();
        self.interaction.reset();
        self.relayout();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn section(&self, index: usize) -> &Section {
        self.assert_index(index);
        &self.sections[index]
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    // --- open state -----------------------------------------------------

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.section(index).open
    }

    /// Request an open. Refused while the section is frozen closed, while
    /// single-expand cannot evict a frozen-open section, or by the veto
    /// hook. A no-op when already open.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn open(&mut self, index: usize, animate: bool) {
        self.assert_index(index);
        self.open_inner(index, animate);
    }

    /// Request a close. Refused while the section is frozen open, while it
    /// is the last open section under at-least-one-open, or by the veto
    /// hook. A no-op when already closed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn close(&mut self, index: usize, animate: bool) {
        self.assert_index(index);
        self.close_inner(index, animate);
    }

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn toggle(&mut self, index: usize, animate: bool) {
        self.assert_index(index);
        if self.sections[index].open {
            self.close_inner(index, animate);
        } else {
            self.open_inner(index, animate);
        }
    }

    /// Open every section not frozen closed. Under single-expand this
    /// degenerates to a cascade fight; callers normally pair it with
    /// multi-expand mode.
    pub fn open_all(&mut self, animate: bool) {
        for index in 0..self.sections.len() {
            self.open_inner(index, animate);
        }
    }

    /// Close every section not frozen open, subject to the usual gates.
    pub fn close_all(&mut self, animate: bool) {
        for index in 0..self.sections.len() {
            self.close_inner(index, animate);
        }
    }

    // --- policies -------------------------------------------------------

    #[must_use]
    pub fn policies(&self) -> Policies {
        self.policies
    }

    /// Toggle single-expand mode. Enabling it keeps the first open section
    /// and closes the rest immediately, skipping frozen-open sections.
    pub fn set_single_expand(&mut self, enabled: bool) {
        self.policies.single_expand = enabled;
        if !enabled {
            return;
        }
        if let Some(keep) = policy::first_open(&self.sections) {
            for victim in policy::cascade_victims(&self.sections, keep) {
                self.close_forced(victim, false);
            }
            self.relayout();
        }
    }

    /// Toggle at-least-one-open mode. Enabling it with nothing open
    /// immediately opens the first section (subject to the usual gates).
    pub fn set_at_least_one_open(&mut self, enabled: bool) {
        self.policies.at_least_one_open = enabled;
        if !enabled {
            return;
        }
        if let Some(target) = policy::repair_target(&self.sections, None) {
            self.open_inner(target, false);
        }
    }

    // --- per-section attributes ------------------------------------------

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set_title(&mut self, index: usize, title: impl Into<String>) {
        self.assert_index(index);
        self.sections[index].title = title.into();
    }

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn title(&self, index: usize) -> &str {
        self.section(index).title()
    }

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set_header_alignment(&mut self, index: usize, align: Alignment) {
        self.assert_index(index);
        self.sections[index].align = align;
    }

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set_divider_visible(&mut self, index: usize, visible: bool) {
        self.assert_index(index);
        self.sections[index].divider = visible;
    }

    /// Set the natural body height in rows. While the section is open and
    /// idle the body re-targets instantly; while animating, the in-flight
    /// run keeps its ticket and heads for the new target.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set_content_height(&mut self, index: usize, rows: u16) {
        self.assert_index(index);
        let section = &mut self.sections[index];
        section.content_height = rows;
        if section.open {
            if section.animating {
                section.target_height = rows;
            } else {
                section.settle(rows);
                self.relayout();
            }
        }
    }

    // --- locks ------------------------------------------------------------

    /// Lock or unlock a section in its current state. Unlocking a
    /// formerly-open section under single-expand closes it (animated) when
    /// another section is open, restoring the single-open invariant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set_locked(&mut self, index: usize, locked: bool) {
        self.assert_index(index);
        if locked {
            self.sections[index].lock = if self.sections[index].open {
                LockMode::LockedOpen
            } else {
                LockMode::LockedClosed
            };
            return;
        }
        let was_open = self.sections[index].open;
        self.sections[index].lock = LockMode::Unlocked;
        if was_open
            && self.policies.single_expand()
            && self
                .sections
                .iter()
                .enumerate()
                .any(|(j, s)| j != index && s.open)
        {
            self.close_inner(index, true);
        }
    }

    /// With `lock` true, force the section open immediately (no animation,
    /// cancelling any in-flight run) and freeze it there. With `lock`
    /// false, unlock it, with the same single-expand reconciliation as
    /// [`set_locked`](Self::set_locked).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn lock_open(&mut self, index: usize, lock: bool) {
        self.assert_index(index);
        if !lock {
            self.set_locked(index, false);
            return;
        }
        if !self.sections[index].open {
            self.sections[index].open = true;
            self.events.push(AccordionEvent::Opened(index));
        }
        let target = self.sections[index].content_height;
        self.sections[index].settle(target);
        self.sections[index].lock = LockMode::LockedOpen;
        self.relayout();
    }

    /// With `lock` true, force the section closed immediately (no
    /// animation, cancelling any in-flight run) and freeze it there. With
    /// `lock` false, unlock it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn lock_closed(&mut self, index: usize, lock: bool) {
        self.assert_index(index);
        if !lock {
            self.set_locked(index, false);
            return;
        }
        if self.sections[index].open {
            self.sections[index].open = false;
            self.events.push(AccordionEvent::Closed(index));
        }
        self.sections[index].settle(0);
        self.sections[index].lock = LockMode::LockedClosed;
        self.relayout();
    }

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.section(index).is_locked()
    }

    // --- animation --------------------------------------------------------

    /// Enable or disable animation for future transitions. In-flight runs
    /// finish on their own.
    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animation_enabled = enabled;
    }

    #[must_use]
    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    /// Override the grow and shrink durations. A zero duration makes that
    /// direction instant.
    pub fn set_animation_durations(&mut self, open: Duration, close: Duration) {
        self.style.open_duration = open;
        self.style.close_duration = close;
    }

    /// True while any section's height is still approaching its target.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.sections.iter().any(|s| s.animating)
    }

    /// Drive every pending animation one frame forward. Call once per
    /// frame interval while [`is_animating`](Self::is_animating) is true;
    /// calling it while idle is a no-op.
    pub fn tick(&mut self) {
        let pending: Vec<ScheduledTick> = self.ticks.drain(..).collect();
        let mut moved = false;
        for tick in pending {
            moved |= self.run_tick(tick);
        }
        if moved {
            self.relayout();
        }
    }

    fn run_tick(&mut self, tick: ScheduledTick) -> bool {
        let Some(section) = self.sections.get_mut(tick.section) else {
            return false;
        };
        // A bumped ticket means this continuation was cancelled.
        if section.ticket != tick.ticket || !section.animating {
            return false;
        }
        match animation::advance(
            section.current_height,
            section.target_height,
            self.style.open_duration,
            self.style.close_duration,
        ) {
            HeightStep::Settle(height) => {
                section.current_height = height;
                section.animating = false;
                trace!(section = tick.section, height, "animation settled");
            }
            HeightStep::Advance(height) => {
                section.current_height = height;
                self.ticks.push_back(tick);
            }
        }
        true
    }

    // --- interaction ------------------------------------------------------

    /// Feed one input event. Returns true when the event was consumed.
    /// Toggles triggered by input are always animated.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Mouse(mouse) => {
                let (consumed, action) = self.interaction.handle_mouse(&mut self.sections, mouse);
                if let Some(Action::Toggle(index)) = action {
                    self.toggle(index, true);
                }
                consumed
            }
            Event::Key(key) => {
                let (consumed, action) = self.interaction.handle_key(&self.sections, key);
                if let Some(Action::Toggle(index)) = action {
                    self.toggle(index, true);
                }
                consumed
            }
            Event::Resize { width, height } => {
                self.layout(Rect::from_size(width, height));
                true
            }
            Event::Tick => {
                let had_work = !self.ticks.is_empty();
                self.tick();
                had_work
            }
        }
    }

    /// Notify that the pointer left the widget, clearing hover.
    pub fn pointer_left(&mut self) {
        self.interaction.pointer_left(&mut self.sections);
    }

    /// Move keyboard focus to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn focus(&mut self, index: usize) {
        self.assert_index(index);
        self.interaction.set_focused(Some(index));
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.interaction.focused()
    }

    #[must_use]
    pub fn hot(&self) -> Option<usize> {
        self.interaction.hot()
    }

    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.interaction.pressed()
    }

    // --- hooks and events -------------------------------------------------

    /// Install the toggle gate. The hook sees the section index after the
    /// lock and policy checks pass; returning true vetoes the transition.
    pub fn on_before_toggle(&mut self, gate: impl FnMut(usize) -> bool + 'static) {
        self.before_toggle = Some(Box::new(gate));
    }

    /// Take all completion events emitted since the last drain, in order.
    #[must_use]
    pub fn drain_events(&mut self) -> Vec<AccordionEvent> {
        std::mem::take(&mut self.events)
    }

    // --- style ------------------------------------------------------------

    pub fn set_style(&mut self, style: AccordionStyle) {
        self.style = style;
        self.relayout();
    }

    #[must_use]
    pub fn style(&self) -> &AccordionStyle {
        &self.style
    }

    pub fn set_icons(&mut self, icons: IconSet) {
        self.icons = icons;
    }

    #[must_use]
    pub fn icons(&self) -> IconSet {
        self.icons
    }

    // --- layout -----------------------------------------------------------

    /// Assign the widget area and recompute all section rectangles.
    pub fn layout(&mut self, area: Rect) {
        self.area = area;
        self.relayout();
    }

    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Total height the sections currently occupy, including the border.
    #[must_use]
    pub fn content_extent(&self) -> u16 {
        let border = self.style.border_width;
        let gaps = self
            .sections
            .len()
            .saturating_sub(1)
            .saturating_mul(usize::from(self.style.section_gap));
        let rows: usize = self
            .sections
            .iter()
            .map(|s| usize::from(self.style.header_height) + usize::from(s.current_height))
            .sum();
        u16::try_from(rows + gaps + usize::from(border) * 2).unwrap_or(u16::MAX)
    }

    // --- internals --------------------------------------------------------

    pub(crate) fn snapshot_state(&self) -> (&[Section], Policies) {
        (&self.sections, self.policies)
    }

    pub(crate) fn replace_state(&mut self, sections: Vec<Section>, policies: Policies) {
        self.sections = sections;
        self.policies = policies;
        self.ticks.clear();
        self.interaction.reset();
        self.relayout();
    }

    fn assert_index(&self, index: usize) {
        assert!(
            index < self.sections.len(),
            "section index {index} out of range (len {})",
            self.sections.len()
        );
    }

    fn relayout(&mut self) {
        crate::layout::arrange(&mut self.sections, self.area, &self.style);
    }

    fn vetoed(&mut self, index: usize) -> bool {
        if let Some(gate) = &mut self.before_toggle
            && gate(index)
        {
            debug!(section = index, "toggle vetoed by hook");
            return true;
        }
        false
    }

    fn open_inner(&mut self, index: usize, animate: bool) {
        if self.sections[index].open {
            return;
        }
        if self.sections[index].lock == LockMode::LockedClosed {
            debug!(section = index, "open refused: locked closed");
            return;
        }
        if self.policies.single_expand()
            && self
                .sections
                .iter()
                .enumerate()
                .any(|(j, s)| j != index && s.open && s.lock == LockMode::LockedOpen)
        {
            debug!(section = index, "open refused: another section is locked open");
            return;
        }
        if self.vetoed(index) {
            return;
        }
        if self.policies.single_expand() {
            for victim in policy::cascade_victims(&self.sections, index) {
                self.close_forced(victim, animate);
            }
        }
        self.sections[index].open = true;
        let target = self.sections[index].content_height;
        self.transition(index, target, animate);
        debug!(section = index, animate, "section opened");
        self.events.push(AccordionEvent::Opened(index));
    }

    fn close_inner(&mut self, index: usize, animate: bool) {
        if !self.sections[index].open {
            return;
        }
        if self.sections[index].lock == LockMode::LockedOpen {
            debug!(section = index, "close refused: locked open");
            return;
        }
        if self.policies.at_least_one_open() && policy::open_count(&self.sections) <= 1 {
            debug!(section = index, "close refused: last open section");
            return;
        }
        if self.vetoed(index) {
            return;
        }
        self.sections[index].open = false;
        self.transition(index, 0, animate);
        debug!(section = index, animate, "section closed");
        self.events.push(AccordionEvent::Closed(index));
    }

    /// Policy-driven close: bypasses the count check and the veto hook so a
    /// cascade cannot be blocked into violating single-expand.
    fn close_forced(&mut self, index: usize, animate: bool) {
        self.sections[index].open = false;
        self.transition(index, 0, animate);
        debug!(section = index, animate, "section closed by cascade");
        self.events.push(AccordionEvent::Closed(index));
    }

    fn transition(&mut self, index: usize, target: u16, animate: bool) {
        let animated = animate
            && self.animation_enabled
            && !self.duration_for(index, target).is_zero()
            && self.sections[index].current_height != target;
        let section = &mut self.sections[index];
        if animated {
            let ticket = section.ticket.bump();
            section.target_height = target;
            section.animating = true;
            self.ticks.push_back(ScheduledTick {
                section: index,
                ticket,
            });
        } else {
            section.settle(target);
            self.relayout();
        }
    }

    fn duration_for(&self, index: usize, target: u16) -> Duration {
        if target > self.sections[index].current_height {
            self.style.open_duration
        } else {
            self.style.close_duration
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion(n: usize) -> Accordion {
        let mut acc = Accordion::new();
        for i in 0..n {
            let idx = acc.push(format!("s{i}"));
            acc.set_content_height(idx, 6);
        }
        acc.layout(Rect::from_size(40, 30));
        acc
    }

    fn drain_ticks(acc: &mut Accordion) {
        for _ in 0..1000 {
            if !acc.is_animating() {
                return;
            }
            acc.tick();
        }
        panic!("animation did not settle");
    }

    #[test]
    fn open_and_close_instant() {
        let mut acc = accordion(2);
        acc.open(0, false);
        assert!(acc.is_open(0));
        assert_eq!(acc.section(0).current_height(), 6);
        assert!(!acc.is_animating());
        acc.close(0, false);
        assert!(!acc.is_open(0));
        assert_eq!(acc.section(0).current_height(), 0);
    }

    #[test]
    fn open_is_a_no_op_when_already_open() {
        let mut acc = accordion(1);
        acc.open(0, false);
        acc.drain_events();
        acc.open(0, true);
        assert!(acc.drain_events().is_empty());
        assert!(!acc.is_animating());
    }

    #[test]
    fn animated_open_converges_to_content_height() {
        let mut acc = accordion(1);
        acc.open(0, true);
        assert!(acc.is_animating());
        assert_eq!(acc.section(0).current_height(), 0);
        drain_ticks(&mut acc);
        assert_eq!(acc.section(0).current_height(), 6);
        assert_eq!(acc.section(0).target_height(), 6);
    }

    #[test]
    fn reversal_mid_flight_cancels_the_first_run() {
        let mut acc = accordion(1);
        acc.set_content_height(0, 20);
        acc.open(0, true);
        acc.tick();
        let partial = acc.section(0).current_height();
        assert!(partial > 0 && partial < 20);
        acc.close(0, true);
        drain_ticks(&mut acc);
        assert_eq!(acc.section(0).current_height(), 0);
        assert!(!acc.is_open(0));
    }

    #[test]
    fn events_fire_at_commit_in_order() {
        let mut acc = accordion(2);
        acc.open(0, false);
        acc.open(1, false);
        acc.close(0, false);
        assert_eq!(
            acc.drain_events(),
            vec![
                AccordionEvent::Opened(0),
                AccordionEvent::Opened(1),
                AccordionEvent::Closed(0)
            ]
        );
        assert!(acc.drain_events().is_empty());
    }

    #[test]
    fn veto_hook_blocks_both_directions() {
        let mut acc = accordion(2);
        acc.on_before_toggle(|i| i == 1);
        acc.open(1, false);
        assert!(!acc.is_open(1));
        acc.open(0, false);
        assert!(acc.is_open(0));
        assert_eq!(acc.drain_events(), vec![AccordionEvent::Opened(0)]);
    }

    #[test]
    fn single_expand_evicts_the_previous_section() {
        let mut acc = accordion(3);
        acc.set_single_expand(true);
        acc.open(0, false);
        acc.open(2, false);
        assert!(!acc.is_open(0));
        assert!(acc.is_open(2));
        assert_eq!(
            acc.drain_events(),
            vec![
                AccordionEvent::Opened(0),
                AccordionEvent::Closed(0),
                AccordionEvent::Opened(2)
            ]
        );
    }

    #[test]
    fn cascade_bypasses_the_veto_hook() {
        let mut acc = accordion(2);
        acc.set_single_expand(true);
        acc.open(0, false);
        // Veto everything: new opens are blocked, but the cascade close of
        // section 0 must still win if an open were permitted. Only allow 1.
        acc.on_before_toggle(|i| i != 1);
        acc.open(1, false);
        assert!(acc.is_open(1));
        assert!(!acc.is_open(0));
    }

    #[test]
    fn enabling_single_expand_keeps_first_open() {
        let mut acc = accordion(3);
        acc.open(0, false);
        acc.open(1, false);
        acc.open(2, false);
        acc.set_single_expand(true);
        assert!(acc.is_open(0));
        assert!(!acc.is_open(1));
        assert!(!acc.is_open(2));
        assert!(!acc.is_animating());
    }

    #[test]
    fn at_least_one_open_refuses_last_close() {
        let mut acc = accordion(2);
        acc.open(0, false);
        acc.set_at_least_one_open(true);
        acc.close(0, false);
        assert!(acc.is_open(0));
        acc.open(1, false);
        acc.close(0, false);
        assert!(!acc.is_open(0));
    }

    #[test]
    fn enabling_at_least_one_open_repairs_immediately() {
        let mut acc = accordion(3);
        acc.set_at_least_one_open(true);
        assert!(acc.is_open(0));
        assert!(!acc.is_animating());
    }

    #[test]
    fn locked_closed_refuses_open() {
        let mut acc = accordion(2);
        acc.set_locked(0, true);
        acc.open(0, false);
        assert!(!acc.is_open(0));
        assert!(acc.is_locked(0));
    }

    #[test]
    fn locked_open_refuses_close_and_cascade() {
        let mut acc = accordion(3);
        acc.open(1, false);
        acc.set_locked(1, true);
        acc.close(1, false);
        assert!(acc.is_open(1));
        acc.set_single_expand(true);
        // Opening another section would have to evict the frozen-open one,
        // so the request is refused outright.
        acc.drain_events();
        acc.open(0, false);
        assert!(!acc.is_open(0));
        assert!(acc.is_open(1));
        assert!(acc.drain_events().is_empty());
    }

    #[test]
    fn unlock_under_single_expand_restores_the_invariant() {
        let mut acc = accordion(3);
        acc.open(1, false);
        acc.set_locked(1, true);
        acc.set_single_expand(true);
        acc.lock_open(2, true);
        acc.set_locked(2, false);
        // Two open sections; unlocking 2 must close it again.
        drain_ticks(&mut acc);
        assert!(acc.is_open(1));
        assert!(!acc.is_open(2));
    }

    #[test]
    fn lock_open_forces_state() {
        let mut acc = accordion(1);
        acc.lock_open(0, true);
        assert!(acc.is_open(0));
        assert!(acc.is_locked(0));
        assert_eq!(acc.section(0).current_height(), 6);
        acc.lock_closed(0, true);
        assert!(!acc.is_open(0));
        assert_eq!(acc.section(0).current_height(), 0);
    }

    #[test]
    fn lock_open_is_instant_even_mid_animation() {
        let mut acc = accordion(1);
        acc.set_content_height(0, 10);
        acc.open(0, true);
        acc.tick();
        assert!(acc.is_animating());
        acc.lock_open(0, true);
        assert!(!acc.is_animating());
        assert_eq!(acc.section(0).current_height(), 10);
        assert_eq!(acc.section(0).target_height(), 10);
        // The cancelled run's continuation must stay inert.
        acc.tick();
        assert_eq!(acc.section(0).current_height(), 10);
    }

    #[test]
    fn lock_variants_unlock_with_false() {
        let mut acc = accordion(2);
        acc.lock_open(0, true);
        acc.lock_open(0, false);
        assert!(!acc.is_locked(0));
        assert!(acc.is_open(0));
        acc.lock_closed(1, true);
        acc.lock_closed(1, false);
        assert!(!acc.is_locked(1));
        assert!(!acc.is_open(1));
        // Unlocked again, so a plain close goes through.
        acc.close(0, false);
        assert!(!acc.is_open(0));
    }

    #[test]
    fn remove_repairs_at_least_one_open() {
        let mut acc = accordion(3);
        acc.open(1, false);
        acc.set_at_least_one_open(true);
        acc.remove(1);
        assert_eq!(acc.len(), 2);
        assert!(acc.is_open(0));
    }

    #[test]
    fn removing_the_first_section_repairs_with_its_successor() {
        let mut acc = accordion(3);
        acc.open(0, false);
        acc.set_at_least_one_open(true);
        acc.remove(0);
        assert_eq!(acc.len(), 2);
        assert!(acc.is_open(0));
        assert_eq!(acc.title(0), "s1");
    }

    #[test]
    fn removing_the_last_remaining_section_needs_no_repair() {
        let mut acc = accordion(1);
        acc.open(0, false);
        acc.set_at_least_one_open(true);
        acc.remove(0);
        assert!(acc.is_empty());
    }

    #[test]
    fn remove_cancels_in_flight_animation() {
        let mut acc = accordion(2);
        acc.set_content_height(0, 20);
        acc.open(0, true);
        acc.tick();
        acc.remove(0);
        assert_eq!(acc.len(), 1);
        // Formerly section 1 is now 0 and untouched by stale ticks.
        acc.tick();
        assert!(!acc.is_animating());
        assert_eq!(acc.section(0).current_height(), 0);
    }

    #[test]
    fn removal_remaps_other_sections_animations() {
        let mut acc = accordion(3);
        acc.set_content_height(2, 20);
        acc.open(2, true);
        acc.tick();
        assert!(acc.section(2).is_animating());
        acc.remove(0);
        drain_ticks(&mut acc);
        assert_eq!(acc.section(1).current_height(), 20);
    }

    #[test]
    fn disabled_animation_makes_transitions_instant() {
        let mut acc = accordion(1);
        acc.set_animation_enabled(false);
        acc.open(0, true);
        assert!(!acc.is_animating());
        assert_eq!(acc.section(0).current_height(), 6);
    }

    #[test]
    fn zero_duration_is_instant() {
        let mut acc = accordion(1);
        acc.set_animation_durations(Duration::ZERO, Duration::ZERO);
        acc.open(0, true);
        assert!(!acc.is_animating());
        assert_eq!(acc.section(0).current_height(), 6);
    }

    #[test]
    fn content_height_change_while_open_retargets() {
        let mut acc = accordion(1);
        acc.open(0, false);
        acc.set_content_height(0, 12);
        assert_eq!(acc.section(0).current_height(), 12);
        assert!(!acc.is_animating());
    }

    #[test]
    fn open_all_and_close_all() {
        let mut acc = accordion(3);
        acc.set_locked(1, true); // locked closed
        acc.open_all(false);
        assert!(acc.is_open(0));
        assert!(!acc.is_open(1));
        assert!(acc.is_open(2));
        acc.set_locked(2, true); // locked open
        acc.close_all(false);
        assert!(!acc.is_open(0));
        assert!(acc.is_open(2));
    }

    #[test]
    fn insert_shifts_later_sections() {
        let mut acc = accordion(2);
        acc.open(1, false);
        acc.insert(0, "front");
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.title(0), "front");
        assert!(acc.is_open(2));
    }

    #[test]
    fn content_extent_tracks_current_heights() {
        let mut acc = accordion(2);
        assert_eq!(acc.content_extent(), 2);
        acc.open(0, false);
        assert_eq!(acc.content_extent(), 8);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_panics() {
        let mut acc = accordion(1);
        acc.open(1, false);
    }
}
