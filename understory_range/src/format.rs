// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label formatting.
//!
//! Formatting is presentation only: stored values keep full precision and
//! only the rendered text is rounded to two decimals.

use alloc::format;
use alloc::string::String;

use crate::state::RangeValues;

/// Currency suffix used when none is configured.
pub const DEFAULT_CURRENCY: &str = "€";

/// Renders values with two decimals and a currency suffix, e.g. `25.00€`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueFormatter {
    currency: String,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl ValueFormatter {
    /// A formatter with the given suffix.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// The currency suffix.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// `value` with exactly two decimals, followed by the currency.
    pub fn format(&self, value: f64) -> String {
        format!("{value:.2}{}", self.currency)
    }

    /// Both values joined as `min - max`.
    pub fn format_range(&self, values: RangeValues) -> String {
        format!("{} - {}", self.format(values.min), self.format(values.max))
    }
}

/// Plain numeric text for seeding an edit field, without rounding.
pub(crate) fn editable_text(value: f64) -> String {
    format!("{value}")
}
