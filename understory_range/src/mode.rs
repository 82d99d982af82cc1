// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range modes: continuous intervals and discrete value sets.
//!
//! A [`RangeMode`] fixes the domain a range's two values live in, and how a
//! normalized track position maps onto it. Reconciliation dispatches on the
//! variant; there is no per-mode trait object.

use alloc::vec::Vec;

use crate::error::ConfigError;

/// How a discrete range picks a value for a dragged position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum DiscreteSnap {
    /// Interpolate the position over `[first, last]` and pick the entry nearest
    /// in value.
    #[default]
    NearestValue,
    /// Pick the entry whose evenly spaced slot (`index / (count - 1)`) is
    /// nearest to the position. This matches where handles are drawn.
    NearestIndex,
}

/// The domain of a range and its position mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum RangeMode {
    /// Values range over `[lower_bound, upper_bound]`, quantized to `step`.
    Continuous {
        /// Smallest selectable value.
        lower_bound: f64,
        /// Largest selectable value.
        upper_bound: f64,
        /// Quantization step for dragged values.
        step: f64,
    },
    /// Values are restricted to a strictly increasing set.
    Discrete {
        /// The selectable values, strictly increasing, at least two.
        values: Vec<f64>,
        /// Snapping policy for dragged positions.
        snap: DiscreteSnap,
    },
}

impl RangeMode {
    /// Build a validated continuous mode.
    pub fn continuous(lower_bound: f64, upper_bound: f64, step: f64) -> Result<Self, ConfigError> {
        if !lower_bound.is_finite() || !upper_bound.is_finite() || lower_bound >= upper_bound {
            return Err(ConfigError::EmptyBounds {
                lower: lower_bound,
                upper: upper_bound,
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        Ok(Self::Continuous {
            lower_bound,
            upper_bound,
            step,
        })
    }

    /// Build a validated discrete mode.
    pub fn discrete(values: Vec<f64>, snap: DiscreteSnap) -> Result<Self, ConfigError> {
        if values.len() < 2 {
            return Err(ConfigError::TooFewValues(values.len()));
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ConfigError::NonFiniteValue { index });
        }
        if let Some(i) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(ConfigError::NotIncreasing { index: i + 1 });
        }
        Ok(Self::Discrete { values, snap })
    }

    /// The `(first, last)` values of the domain.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Continuous {
                lower_bound,
                upper_bound,
                ..
            } => (*lower_bound, *upper_bound),
            // Sets built through `discrete` always have two entries; an
            // unvalidated empty set reads as `(0, 0)`.
            Self::Discrete { values, .. } => match (values.first(), values.last()) {
                (Some(first), Some(last)) => (*first, *last),
                _ => (0.0, 0.0),
            },
        }
    }

    /// Whether labels may be edited as text. Only continuous ranges allow it.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Continuous { .. })
    }

    /// Linear interpolation of `position` over [`domain`](Self::domain).
    pub fn value_at(&self, position: f64) -> f64 {
        let (first, last) = self.domain();
        first + unit(position) * (last - first)
    }

    /// Inverse of [`value_at`](Self::value_at), clamped to `[0, 1]`.
    pub fn position_of_value(&self, value: f64) -> f64 {
        let (first, last) = self.domain();
        unit((value - first) / (last - first))
    }

    /// Evenly spaced slot for a discrete index: `index / (count - 1)`.
    ///
    /// Continuous modes have no slots, and neither do sets with fewer than
    /// two entries; both return `0.0`.
    pub fn position_of_index(&self, index: usize) -> f64 {
        match self {
            Self::Continuous { .. } => 0.0,
            Self::Discrete { values, .. } => {
                let last = values.len().saturating_sub(1);
                if last == 0 {
                    return 0.0;
                }
                index.min(last) as f64 / last as f64
            }
        }
    }
}

/// Clamp to `[0, 1]`, mapping NaN to `0`.
pub(crate) fn unit(position: f64) -> f64 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}
