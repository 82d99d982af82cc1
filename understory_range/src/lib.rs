// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range --heading-base-level=0

//! Understory Range: the value model behind a two-handle range slider.
//!
//! ## Overview
//!
//! This crate owns a `{min, max}` selection and reconciles it against user input.
//! It pairs with [`understory_drag`], which turns pointer and touch input into normalized track positions;
//! this crate turns those positions into domain values.
//!
//! Two modes are supported, as variants of [`RangeMode`](crate::mode::RangeMode):
//! - Continuous: values over `[lower, upper]`, quantized to a step, with editable labels.
//! - Discrete: values restricted to a fixed, strictly increasing set, snapped to the nearest entry.
//!
//! In both modes the handles never cross. In continuous mode they stay at least one step apart;
//! in discrete mode they never share an entry.
//!
//! ## Workflow
//!
//! 1) Configure: build a [`ContinuousConfig`](crate::config::ContinuousConfig) or
//!    [`DiscreteConfig`](crate::config::DiscreteConfig), directly or from a data source payload
//!    ([`RangeBounds`](crate::config::RangeBounds), [`FixedRangeValues`](crate::config::FixedRangeValues)).
//! 2) Reconcile: create a [`Reconciler`](crate::reconciler::Reconciler) with a
//!    [`ChangeSink`](crate::reconciler::ChangeSink), then apply drags and label edits.
//! 3) Edit labels: drive [`LabelEditor`](crate::edit::LabelEditor) through
//!    activate → type → commit or cancel.
//! 4) Render: read positions from [`RangeState`](crate::state::RangeState) and label text from
//!    [`ValueFormatter`](crate::format::ValueFormatter).
//!
//! [`RangeSlider`](crate::slider::RangeSlider) bundles all of the above with a
//! [`DragTracker`](understory_drag::tracker::DragTracker) for hosts that want a single object.
//!
//! ## Example
//!
//! ```
//! use understory_drag::types::Handle;
//! use understory_range::config::FixedRangeValues;
//! use understory_range::reconciler::{NoSink, Reconciler};
//! use understory_range::state::RangeValues;
//!
//! let payload = FixedRangeValues { range_values: vec![1.99, 5.99, 10.99, 30.99, 50.99, 70.99] };
//! let mut range = Reconciler::new(payload, NoSink).unwrap();
//!
//! // A drag whose position interpolates to 11.5 snaps to 10.99.
//! let position = (11.5 - 1.99) / (70.99 - 1.99);
//! assert_eq!(range.apply_drag(Handle::Min, position), RangeValues::new(10.99, 70.99));
//!
//! // The min handle can never reach the max entry.
//! assert_eq!(range.apply_drag(Handle::Min, 1.0).min, 50.99);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library float math and error traits.
//! - `libm`: float math for `no_std` builds.
//! - `serde`: (de)serialize configuration, payloads, and [`RangeValues`](crate::state::RangeValues).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod edit;
pub mod error;
pub mod format;
pub mod mode;
pub mod reconciler;
pub mod slider;
pub mod state;
