// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: a deterministic, `no_std` drag tracker for two-handle sliders.
//!
//! ## Overview
//!
//! This crate turns raw pointer and touch coordinates into normalized positions (`0.0..=1.0`) along a horizontal track.
//! It does not know what the positions mean.
//! Feed its [`DragEvent`](crate::types::DragEvent) output into a value model (for example `understory_range`) that maps positions to domain values.
//!
//! ## Inputs
//!
//! - Client-space x coordinates, either as bare `f64` values or inside an [`InputEvent`](crate::types::InputEvent).
//! - A [`TrackGeometry`](crate::types::TrackGeometry) provider that reports the track's on-screen bounds as a Kurbo [`Rect`](kurbo::Rect).
//!   A provider may report `None` (for example before layout has measured the track); positions then fall back to `0.0`.
//!
//! ## Sessions
//!
//! A drag session starts when a handle is pressed and ends on release anywhere in the interaction surface.
//! - Pressing emits one [`DragEvent::Moved`](crate::types::DragEvent::Moved) right away, so the value follows the press and not only the first move.
//! - Moves are reported only while a session is active, and are emitted in exactly the order they are received.
//! - Release emits [`DragEvent::Ended`](crate::types::DragEvent::Ended); cancelation emits [`DragEvent::Cancelled`](crate::types::DragEvent::Cancelled).
//!
//! Feed move and release events from a listener scoped to the whole surface (the document, the window),
//! not the handle element, so that fast motion leaving the handle's hit area is not lost.
//! That listener can stay attached for the component's lifetime: with no active session it is a no-op.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_drag::tracker::DragTracker;
//! use understory_drag::types::{DragEvent, Handle, InputEvent};
//!
//! // Track spans x in [100, 300].
//! let track = Rect::new(100.0, 0.0, 300.0, 20.0);
//! let mut tracker = DragTracker::new();
//!
//! let press = InputEvent::PointerDown { handle: Handle::Min, point: Point::new(150.0, 10.0) };
//! assert_eq!(
//!     tracker.handle_event(press, &track),
//!     Some(DragEvent::Moved { handle: Handle::Min, position: 0.25 })
//! );
//!
//! // Leaving the track clamps to the end.
//! let drag = InputEvent::PointerMove { point: Point::new(400.0, 90.0) };
//! assert_eq!(
//!     tracker.handle_event(drag, &track),
//!     Some(DragEvent::Moved { handle: Handle::Min, position: 1.0 })
//! );
//!
//! assert_eq!(tracker.handle_event(InputEvent::PointerUp, &track), Some(DragEvent::Ended(Handle::Min)));
//! assert_eq!(tracker.active(), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod tracker;
pub mod types;
