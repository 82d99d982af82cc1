// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value reconciliation.
//!
//! ## Overview
//!
//! A [`Reconciler`] owns the selected `{min, max}` pair and applies drags and
//! label edits according to its [`RangeMode`].
//!
//! ## Continuous mode
//!
//! - A dragged handle stops one `step` short of the other handle.
//! - Dragged values are quantized to multiples of `step`: `round(raw / step) * step`.
//!   The result is then clamped to the bounds and to the non-crossing limit.
//! - Label edits clamp the parsed number the same way, without quantizing.
//!
//! ## Discrete mode
//!
//! - The min handle may only take entries strictly below the max value, and
//!   the max handle only entries strictly above the min value.
//! - With [`DiscreteSnap::NearestValue`], the position is interpolated over
//!   `[first, last]` and the nearest eligible entry wins. On an exact tie the
//!   lower-indexed entry wins.
//! - With [`DiscreteSnap::NearestIndex`], the position picks the nearest slot,
//!   clamped to the eligible indices.
//! - When no entry is eligible, the handle stays where it is.
//!
//! ## Notifications
//!
//! The [`ChangeSink`] is called once on construction with the initial values,
//! then after every operation that changes either value.

use tracing::debug;
use understory_drag::types::{DragEvent, Handle};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::RangeConfig;
use crate::error::ConfigError;
use crate::format::editable_text;
use crate::mode::{DiscreteSnap, RangeMode, unit};
use crate::state::{RangeState, RangeValues};

/// Receives the selected values whenever they change.
pub trait ChangeSink {
    /// Called with the new `{min, max}` pair.
    fn values_changed(&mut self, values: RangeValues);
}

impl<F: FnMut(RangeValues)> ChangeSink for F {
    #[inline]
    fn values_changed(&mut self, values: RangeValues) {
        self(values);
    }
}

/// Records every notification in order.
impl ChangeSink for alloc::vec::Vec<RangeValues> {
    fn values_changed(&mut self, values: RangeValues) {
        self.push(values);
    }
}

/// A sink that ignores notifications.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSink;

impl ChangeSink for NoSink {
    #[inline]
    fn values_changed(&mut self, _values: RangeValues) {}
}

/// Result of [`Reconciler::apply_label_edit`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LabelEdit {
    /// The edit parsed and was clamped into place.
    Applied(RangeValues),
    /// The text was not a number; the previous value is kept.
    Discarded,
    /// The range is discrete and labels are not editable.
    Unsupported,
}

/// Owns a range's selection and applies mode-specific updates.
///
/// ## Usage
///
/// - Build with [`Reconciler::new`] from any [`RangeConfig`] source.
/// - Feed tracker output to [`Reconciler::apply_drag_event`], or call
///   [`Reconciler::apply_drag`] directly with a handle and position.
/// - Commit text edits with [`Reconciler::apply_label_edit`].
pub struct Reconciler<S: ChangeSink = NoSink> {
    mode: RangeMode,
    state: RangeState,
    sink: S,
}

impl<S: ChangeSink> core::fmt::Debug for Reconciler<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reconciler")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S: ChangeSink> Reconciler<S> {
    /// Validate `config`, build the initial selection, and report it to `sink`.
    pub fn new(config: impl Into<RangeConfig>, mut sink: S) -> Result<Self, ConfigError> {
        let (mode, state) = config.into().build()?;
        debug!(min = state.min_value, max = state.max_value, "range initialized");
        sink.values_changed(state.values());
        Ok(Self { mode, state, sink })
    }

    /// The range mode.
    pub fn mode(&self) -> &RangeMode {
        &self.mode
    }

    /// The current selection.
    pub fn state(&self) -> &RangeState {
        &self.state
    }

    /// The current `{min, max}` pair.
    pub fn values(&self) -> RangeValues {
        self.state.values()
    }

    /// The change sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the change sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the reconciler, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Text to seed an edit field with: the full-precision value, no suffix.
    pub fn editable_text(&self, handle: Handle) -> alloc::string::String {
        editable_text(self.state.value(handle))
    }

    /// The lowest and highest values `handle` may take right now.
    pub fn handle_limits(&self, handle: Handle) -> (f64, f64) {
        match &self.mode {
            RangeMode::Continuous {
                lower_bound,
                upper_bound,
                step,
            } => continuous_limits(*lower_bound, *upper_bound, *step, &self.state, handle),
            RangeMode::Discrete { values, .. } => {
                let (min_index, max_index) = self.discrete_indices();
                let last = values.len() - 1;
                match handle {
                    Handle::Min => (values[0], values[max_index.saturating_sub(1)]),
                    Handle::Max => (values[(min_index + 1).min(last)], values[last]),
                }
            }
        }
    }

    /// Move `handle` towards `position` (`0.0..=1.0`), honoring step,
    /// snapping, and the non-crossing rule.
    ///
    /// Returns the resulting pair. Applying the same position twice in a row
    /// gives the same result as applying it once.
    pub fn apply_drag(&mut self, handle: Handle, position: f64) -> RangeValues {
        let position = unit(position);
        let before = self.state.values();
        let Some((value, index)) = self.resolve_drag(handle, position) else {
            debug!(%handle, "no eligible value, handle left in place");
            return before;
        };
        let position = match index {
            Some(index) => self.mode.position_of_index(index),
            None => self.mode.position_of_value(value),
        };
        self.set(handle, value, position, index);
        self.notify_if_changed(before);
        self.state.values()
    }

    /// The value (and discrete index) `handle` lands on for `position`.
    fn resolve_drag(&self, handle: Handle, position: f64) -> Option<(f64, Option<usize>)> {
        match &self.mode {
            RangeMode::Continuous {
                lower_bound,
                upper_bound,
                step,
            } => {
                let (lower, upper, step) = (*lower_bound, *upper_bound, *step);
                let (floor, ceiling) = continuous_limits(lower, upper, step, &self.state, handle);
                let limited = match handle {
                    Handle::Min => position.min(self.mode.position_of_value(ceiling)),
                    Handle::Max => position.max(self.mode.position_of_value(floor)),
                };
                let raw = lower + limited * (upper - lower);
                Some((quantize(raw, step).clamp(floor, ceiling), None))
            }
            RangeMode::Discrete { values, snap } => {
                let (min_index, max_index) = self.discrete_indices();
                let eligible = match handle {
                    Handle::Min => 0..max_index,
                    Handle::Max => min_index + 1..values.len(),
                };
                let index = match snap {
                    DiscreteSnap::NearestValue => {
                        nearest_value(values, eligible, self.mode.value_at(position))
                    }
                    DiscreteSnap::NearestIndex => nearest_slot(values.len(), eligible, position),
                }?;
                Some((values[index], Some(index)))
            }
        }
    }

    /// Apply a tracker event. Only [`DragEvent::Moved`] changes values.
    pub fn apply_drag_event(&mut self, event: DragEvent) -> Option<RangeValues> {
        match event {
            DragEvent::Moved { handle, position } => Some(self.apply_drag(handle, position)),
            DragEvent::Ended(_) | DragEvent::Cancelled(_) => None,
        }
    }

    /// Set `handle` from typed text, clamped against the bounds and the other handle.
    ///
    /// Continuous mode only. Text that does not parse as a number is discarded
    /// and the previous value retained.
    pub fn apply_label_edit(&mut self, handle: Handle, text: &str) -> LabelEdit {
        let RangeMode::Continuous {
            lower_bound,
            upper_bound,
            step,
        } = self.mode
        else {
            debug!(%handle, "label edit ignored, discrete ranges are not editable");
            return LabelEdit::Unsupported;
        };
        let parsed = match text.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => v,
            _ => {
                debug!(%handle, text, "label edit discarded, not a number");
                return LabelEdit::Discarded;
            }
        };
        let before = self.state.values();
        let (floor, ceiling) =
            continuous_limits(lower_bound, upper_bound, step, &self.state, handle);
        let value = parsed.clamp(floor, ceiling);
        let position = self.mode.position_of_value(value);
        self.set(handle, value, position, None);
        self.notify_if_changed(before);
        LabelEdit::Applied(self.state.values())
    }

    fn discrete_indices(&self) -> (usize, usize) {
        // Discrete states are always built with indices.
        self.state.indices.unwrap_or((0, 0))
    }

    fn set(&mut self, handle: Handle, value: f64, position: f64, index: Option<usize>) {
        let state = &mut self.state;
        match handle {
            Handle::Min => {
                state.min_value = value;
                state.min_position = position;
            }
            Handle::Max => {
                state.max_value = value;
                state.max_position = position;
            }
        }
        if let (Some(index), Some((min_index, max_index))) = (index, state.indices.as_mut()) {
            match handle {
                Handle::Min => *min_index = index,
                Handle::Max => *max_index = index,
            }
        }
    }

    fn notify_if_changed(&mut self, before: RangeValues) {
        let after = self.state.values();
        if after != before {
            debug!(min = after.min, max = after.max, "range values changed");
            self.sink.values_changed(after);
        }
    }
}

/// `(lowest, highest)` value `handle` may take in a continuous range.
///
/// Each handle keeps one `step` away from the other, unless the bounds leave
/// no room, in which case it is pinned to its bound.
fn continuous_limits(
    lower: f64,
    upper: f64,
    step: f64,
    state: &RangeState,
    handle: Handle,
) -> (f64, f64) {
    match handle {
        Handle::Min => (lower, (state.max_value - step).max(lower)),
        Handle::Max => ((state.min_value + step).min(upper), upper),
    }
}

fn quantize(raw: f64, step: f64) -> f64 {
    // Adding zero folds -0.0 into 0.0 so labels never read "-0.00".
    (raw / step).round() * step + 0.0
}

/// Index in `eligible` whose value is nearest to `target`; lower index wins ties.
fn nearest_value(
    values: &[f64],
    eligible: core::ops::Range<usize>,
    target: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for index in eligible {
        let distance = (values[index] - target).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Slot nearest to `position` among `count` even slots, clamped into `eligible`.
fn nearest_slot(count: usize, eligible: core::ops::Range<usize>, position: f64) -> Option<usize> {
    if eligible.is_empty() {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "position is in [0, 1], so the product is a valid slot index."
    )]
    let slot = (position * (count - 1) as f64).round() as usize;
    Some(slot.clamp(eligible.start, eligible.end - 1))
}
