// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Current selection of a range: values, positions, and discrete indices.

use understory_drag::types::Handle;

/// The selected `{min, max}` pair, as reported to change sinks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeValues {
    /// Lower selected value.
    pub min: f64,
    /// Upper selected value.
    pub max: f64,
}

impl RangeValues {
    /// Create a pair.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Selection state owned by a [`Reconciler`](crate::reconciler::Reconciler).
///
/// Positions are derived from values: linear over the bounds in continuous
/// mode, `index / (count - 1)` in discrete mode.
///
/// Invariants, upheld by every reconciler operation:
/// - `min_value <= max_value`.
/// - Both values lie in the mode's domain (within the bounds, or members of the set).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeState {
    pub(crate) min_value: f64,
    pub(crate) max_value: f64,
    pub(crate) min_position: f64,
    pub(crate) max_position: f64,
    pub(crate) indices: Option<(usize, usize)>,
}

impl RangeState {
    /// Lower selected value.
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Upper selected value.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Track position (`0.0..=1.0`) of the min handle.
    pub fn min_position(&self) -> f64 {
        self.min_position
    }

    /// Track position (`0.0..=1.0`) of the max handle.
    pub fn max_position(&self) -> f64 {
        self.max_position
    }

    /// `(min, max)` indices into the value set, in discrete mode.
    pub fn indices(&self) -> Option<(usize, usize)> {
        self.indices
    }

    /// Value of the given handle.
    pub fn value(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Min => self.min_value,
            Handle::Max => self.max_value,
        }
    }

    /// Track position of the given handle.
    pub fn position(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Min => self.min_position,
            Handle::Max => self.max_position,
        }
    }

    /// The selected values as a pair.
    pub fn values(&self) -> RangeValues {
        RangeValues::new(self.min_value, self.max_value)
    }
}
