// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for drag tracking: handles, input events, drag events, and track geometry.
//!
//! ## Overview
//!
//! These types describe what goes into the [`tracker`](crate::tracker) and what comes out of it.
//! They are also shared with downstream value models so both sides name handles the same way.

use kurbo::{Point, Rect};

/// One of the two draggable endpoints of a range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Handle {
    /// The lower endpoint.
    Min,
    /// The upper endpoint.
    Max,
}

impl Handle {
    /// Return the opposite handle.
    pub const fn other(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }

    /// Short lowercase name, useful for labels and log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl core::fmt::Display for Handle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A device input event, as forwarded by the host.
///
/// Pointer (mouse) and touch input travel through parallel variants with identical semantics.
/// Touch variants carry the list of active touch points; only the first one is used.
///
/// Consumed by [`DragTracker::handle_event`](crate::tracker::DragTracker::handle_event).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// A pointer button was pressed over `handle`.
    PointerDown {
        /// The handle under the pointer.
        handle: Handle,
        /// Pointer location in client coordinates.
        point: Point,
    },
    /// The pointer moved anywhere in the interaction surface.
    PointerMove {
        /// Pointer location in client coordinates.
        point: Point,
    },
    /// A pointer button was released anywhere in the interaction surface.
    PointerUp,
    /// A touch started over `handle`.
    TouchStart {
        /// The handle under the touch.
        handle: Handle,
        /// Active touch points in client coordinates.
        touches: &'a [Point],
    },
    /// Active touches moved anywhere in the interaction surface.
    TouchMove {
        /// Active touch points in client coordinates.
        touches: &'a [Point],
    },
    /// A touch was lifted anywhere in the interaction surface.
    TouchEnd,
    /// The host abandoned the interaction (focus loss, gesture takeover, and so on).
    Cancel,
}

/// Output of the tracker, one per accepted input event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragEvent {
    /// The active handle should move to `position` (`0.0..=1.0` along the track).
    Moved {
        /// The handle being dragged.
        handle: Handle,
        /// Normalized track position.
        position: f64,
    },
    /// The drag session for the given handle ended by release.
    Ended(Handle),
    /// The drag session for the given handle was abandoned.
    Cancelled(Handle),
}

impl DragEvent {
    /// The handle this event refers to.
    pub const fn handle(&self) -> Handle {
        match *self {
            Self::Moved { handle, .. } | Self::Ended(handle) | Self::Cancelled(handle) => handle,
        }
    }
}

/// Supplies the track's bounds in client coordinates, on demand.
///
/// Only the horizontal extent is used: the left edge and the width.
/// Return `None` when the bounds are not known yet (for example before the first layout pass);
/// the tracker then reports position `0.0` instead of failing.
pub trait TrackGeometry {
    /// Returns the current track bounds, if measured.
    fn track_bounds(&self) -> Option<Rect>;
}

impl TrackGeometry for Rect {
    #[inline]
    fn track_bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl TrackGeometry for Option<Rect> {
    #[inline]
    fn track_bounds(&self) -> Option<Rect> {
        *self
    }
}

impl<T: TrackGeometry + ?Sized> TrackGeometry for &T {
    #[inline]
    fn track_bounds(&self) -> Option<Rect> {
        (**self).track_bounds()
    }
}
