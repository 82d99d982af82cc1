// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Only construction can fail. Once a [`Reconciler`](crate::reconciler::Reconciler)
//! exists, every drag and edit is absorbed by clamping or silent rejection.

/// Why a range configuration was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Continuous bounds are not finite or do not satisfy `lower < upper`.
    #[error("range bounds [{lower}, {upper}] are empty or not finite")]
    EmptyBounds {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
    /// The quantization step is not finite or not positive.
    #[error("step {0} must be finite and greater than zero")]
    InvalidStep(f64),
    /// An initial continuous value lies outside the bounds.
    #[error("initial value {value} lies outside [{lower}, {upper}]")]
    InitialOutOfBounds {
        /// Offending value.
        value: f64,
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },
    /// The initial continuous min lies above the initial max.
    #[error("initial min {min} is above initial max {max}")]
    InitialOrder {
        /// Initial min value.
        min: f64,
        /// Initial max value.
        max: f64,
    },
    /// The initial continuous values are closer than one step, although the
    /// bounds leave room for a full step between them.
    #[error("initial min {min} and max {max} must be at least one step ({step}) apart")]
    InitialGap {
        /// Initial min value.
        min: f64,
        /// Initial max value.
        max: f64,
        /// Configured step.
        step: f64,
    },
    /// A discrete value set needs at least two entries.
    #[error("a discrete range needs at least 2 values, got {0}")]
    TooFewValues(usize),
    /// A discrete value is NaN or infinite.
    #[error("value at index {index} is not finite")]
    NonFiniteValue {
        /// Position of the offending entry.
        index: usize,
    },
    /// Discrete values are not strictly increasing.
    #[error("values must be strictly increasing, but index {index} is not above its predecessor")]
    NotIncreasing {
        /// Position of the first entry that does not exceed its predecessor.
        index: usize,
    },
    /// An initial discrete index is past the end of the value set.
    #[error("index {index} is out of range for {len} values")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of values.
        len: usize,
    },
    /// The initial discrete min index is not below the max index.
    #[error("initial min index {min} must be below initial max index {max}")]
    IndexOrder {
        /// Initial min index.
        min: usize,
        /// Initial max index.
        max: usize,
    },
}
