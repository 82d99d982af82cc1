// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range configuration and collaborator payloads.
//!
//! ## Overview
//!
//! A range is configured once, before the [`Reconciler`](crate::reconciler::Reconciler)
//! is built, from either a [`ContinuousConfig`] or a [`DiscreteConfig`].
//! Data sources typically answer with one of two payload shapes, which convert
//! directly:
//!
//! - [`RangeBounds`] (`{"min": 1, "max": 100}`) into [`ContinuousConfig`].
//! - [`FixedRangeValues`] (`{"rangeValues": [1.99, 5.99]}`) into [`DiscreteConfig`].
//!
//! With the `serde` feature, all of these (de)serialize with camelCase field names.
//!
//! ## Example
//!
//! ```
//! use understory_range::config::{ContinuousConfig, RangeBounds};
//!
//! let config = ContinuousConfig::from(RangeBounds { min: 1.0, max: 100.0 })
//!     .with_step(0.5)
//!     .with_initial_min(10.0);
//! assert_eq!(config.step, 0.5);
//! assert_eq!(config.currency, "€");
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::format::DEFAULT_CURRENCY;
use crate::mode::{DiscreteSnap, RangeMode};
use crate::state::RangeState;

/// Default quantization step for continuous ranges.
pub const DEFAULT_STEP: f64 = 1.0;

#[cfg(feature = "serde")]
fn default_step() -> f64 {
    DEFAULT_STEP
}

#[cfg(feature = "serde")]
fn default_currency() -> String {
    String::from(DEFAULT_CURRENCY)
}

/// Configuration for a continuous range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ContinuousConfig {
    /// Smallest selectable value.
    pub lower_bound: f64,
    /// Largest selectable value.
    pub upper_bound: f64,
    /// Initial min value; defaults to `lower_bound`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_min: Option<f64>,
    /// Initial max value; defaults to `upper_bound`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_max: Option<f64>,
    /// Quantization step; defaults to [`DEFAULT_STEP`].
    #[cfg_attr(feature = "serde", serde(default = "default_step"))]
    pub step: f64,
    /// Currency suffix for labels; defaults to `€`.
    #[cfg_attr(feature = "serde", serde(default = "default_currency"))]
    pub currency: String,
}

impl ContinuousConfig {
    /// Bounds with default step, currency, and initial values.
    pub fn new(lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
            initial_min: None,
            initial_max: None,
            step: DEFAULT_STEP,
            currency: String::from(DEFAULT_CURRENCY),
        }
    }

    /// Set the quantization step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the initial min value.
    pub fn with_initial_min(mut self, value: f64) -> Self {
        self.initial_min = Some(value);
        self
    }

    /// Set the initial max value.
    pub fn with_initial_max(mut self, value: f64) -> Self {
        self.initial_max = Some(value);
        self
    }

    /// Set the currency suffix.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    fn build(&self) -> Result<(RangeMode, RangeState), ConfigError> {
        let mode = RangeMode::continuous(self.lower_bound, self.upper_bound, self.step)?;
        let (lower, upper) = (self.lower_bound, self.upper_bound);
        let min = self.initial_min.unwrap_or(lower);
        let max = self.initial_max.unwrap_or(upper);
        for value in [min, max] {
            if !(lower..=upper).contains(&value) {
                return Err(ConfigError::InitialOutOfBounds {
                    value,
                    lower,
                    upper,
                });
            }
        }
        if min > max {
            return Err(ConfigError::InitialOrder { min, max });
        }
        // Bounds narrower than a step pin the handles instead.
        if upper - lower >= self.step && max - min < self.step {
            return Err(ConfigError::InitialGap {
                min,
                max,
                step: self.step,
            });
        }
        let state = RangeState {
            min_value: min,
            max_value: max,
            min_position: mode.position_of_value(min),
            max_position: mode.position_of_value(max),
            indices: None,
        };
        Ok((mode, state))
    }
}

/// Configuration for a discrete range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DiscreteConfig {
    /// Selectable values, strictly increasing, at least two.
    pub values: Vec<f64>,
    /// Initial min index; defaults to `0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_min_index: Option<usize>,
    /// Initial max index; defaults to the last index.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_max_index: Option<usize>,
    /// Currency suffix for labels; defaults to `€`.
    #[cfg_attr(feature = "serde", serde(default = "default_currency"))]
    pub currency: String,
    /// Snapping policy for dragged positions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub snap: DiscreteSnap,
}

impl DiscreteConfig {
    /// A value set with default currency, snapping, and initial indices.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            initial_min_index: None,
            initial_max_index: None,
            currency: String::from(DEFAULT_CURRENCY),
            snap: DiscreteSnap::default(),
        }
    }

    /// Set the initial min index.
    pub fn with_initial_min_index(mut self, index: usize) -> Self {
        self.initial_min_index = Some(index);
        self
    }

    /// Set the initial max index.
    pub fn with_initial_max_index(mut self, index: usize) -> Self {
        self.initial_max_index = Some(index);
        self
    }

    /// Set the currency suffix.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the snapping policy.
    pub fn with_snap(mut self, snap: DiscreteSnap) -> Self {
        self.snap = snap;
        self
    }

    fn build(&self) -> Result<(RangeMode, RangeState), ConfigError> {
        let mode = RangeMode::discrete(self.values.clone(), self.snap)?;
        let len = self.values.len();
        let min_index = self.initial_min_index.unwrap_or(0);
        let max_index = self.initial_max_index.unwrap_or(len - 1);
        for index in [min_index, max_index] {
            if index >= len {
                return Err(ConfigError::IndexOutOfRange { index, len });
            }
        }
        if min_index >= max_index {
            return Err(ConfigError::IndexOrder {
                min: min_index,
                max: max_index,
            });
        }
        let state = RangeState {
            min_value: self.values[min_index],
            max_value: self.values[max_index],
            min_position: mode.position_of_index(min_index),
            max_position: mode.position_of_index(max_index),
            indices: Some((min_index, max_index)),
        };
        Ok((mode, state))
    }
}

/// Either kind of range configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "mode", rename_all = "camelCase")
)]
pub enum RangeConfig {
    /// A continuous range.
    Continuous(ContinuousConfig),
    /// A discrete range.
    Discrete(DiscreteConfig),
}

impl RangeConfig {
    /// Currency suffix for labels.
    pub fn currency(&self) -> &str {
        match self {
            Self::Continuous(c) => &c.currency,
            Self::Discrete(d) => &d.currency,
        }
    }

    /// Validate and produce the mode and initial selection.
    pub(crate) fn build(&self) -> Result<(RangeMode, RangeState), ConfigError> {
        match self {
            Self::Continuous(c) => c.build(),
            Self::Discrete(d) => d.build(),
        }
    }
}

impl From<ContinuousConfig> for RangeConfig {
    fn from(config: ContinuousConfig) -> Self {
        Self::Continuous(config)
    }
}

impl From<DiscreteConfig> for RangeConfig {
    fn from(config: DiscreteConfig) -> Self {
        Self::Discrete(config)
    }
}

/// Payload of a continuous-bounds data source: `{"min": .., "max": ..}`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeBounds {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl From<RangeBounds> for ContinuousConfig {
    fn from(bounds: RangeBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}

impl From<RangeBounds> for RangeConfig {
    fn from(bounds: RangeBounds) -> Self {
        Self::Continuous(bounds.into())
    }
}

/// Payload of a fixed-values data source: `{"rangeValues": [..]}`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FixedRangeValues {
    /// Selectable values, ascending.
    pub range_values: Vec<f64>,
}

impl From<FixedRangeValues> for DiscreteConfig {
    fn from(payload: FixedRangeValues) -> Self {
        Self::new(payload.range_values)
    }
}

impl From<FixedRangeValues> for RangeConfig {
    fn from(payload: FixedRangeValues) -> Self {
        Self::Discrete(payload.into())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn range_bounds_payload() {
        let bounds: RangeBounds = serde_json::from_str(r#"{"min": 1, "max": 100}"#).unwrap();
        assert_eq!(bounds, RangeBounds { min: 1.0, max: 100.0 });
    }

    #[test]
    fn fixed_range_payload_uses_camel_case() {
        let payload: FixedRangeValues =
            serde_json::from_str(r#"{"rangeValues": [1.99, 5.99, 10.99]}"#).unwrap();
        assert_eq!(payload.range_values, [1.99, 5.99, 10.99]);
    }

    #[test]
    fn continuous_config_fills_defaults() {
        let config: ContinuousConfig =
            serde_json::from_str(r#"{"lowerBound": 0, "upperBound": 10}"#).unwrap();
        assert_eq!(config, ContinuousConfig::new(0.0, 10.0));
    }

    #[test]
    fn tagged_range_config() {
        let config: RangeConfig = serde_json::from_str(
            r#"{"mode": "discrete", "values": [1, 2, 3], "snap": "nearestIndex", "currency": "$"}"#,
        )
        .unwrap();
        let RangeConfig::Discrete(d) = config else {
            panic!("expected a discrete config");
        };
        assert_eq!(d.snap, DiscreteSnap::NearestIndex);
        assert_eq!(d.currency, "$");
        assert_eq!(d.initial_min_index, None);
    }
}
