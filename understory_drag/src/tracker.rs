// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker implementation.
//!
//! ## Overview
//!
//! Maps client coordinates to track positions and owns the active-handle session.
//! One [`DragTracker`] lives for as long as the slider it serves; each input
//! callback borrows it mutably, so there is no captured state to go stale
//! between press, move, and release.
//!
//! ## Ordering
//!
//! Every accepted input event produces at most one [`DragEvent`], synchronously.
//! Nothing is buffered, coalesced, or reordered here.

use kurbo::Rect;
use tracing::trace;

use crate::types::{DragEvent, Handle, InputEvent, TrackGeometry};

/// Convert a client x coordinate into a normalized position along `bounds`.
///
/// `position = clamp((client_x - left) / width, 0, 1)`.
///
/// Unmeasured bounds (`None`), a degenerate width, or a non-finite coordinate
/// all yield `0.0`.
pub fn compute_position(client_x: f64, bounds: Option<Rect>) -> f64 {
    let Some(bounds) = bounds else {
        trace!("track bounds unavailable, using position 0");
        return 0.0;
    };
    let bounds = bounds.abs();
    let width = bounds.width();
    if width <= 0.0 || !width.is_finite() || !client_x.is_finite() {
        trace!(width, client_x, "degenerate track geometry, using position 0");
        return 0.0;
    }
    ((client_x - bounds.x0) / width).clamp(0.0, 1.0)
}

/// Tracks which handle, if any, is being dragged.
///
/// ## Usage
///
/// - Forward handle presses to [`DragTracker::begin_drag`] (or the `*Down`/`*Start`
///   variants of [`InputEvent`] to [`DragTracker::handle_event`]).
/// - Forward surface-wide moves and releases regardless of drag state;
///   they are ignored when no session is active.
/// - Apply each returned [`DragEvent`] to your value model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragTracker {
    active: Option<Handle>,
}

impl DragTracker {
    /// Create a tracker with no active session.
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// The handle currently being dragged, if any.
    pub fn active(&self) -> Option<Handle> {
        self.active
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start dragging `handle` and report its position under `client_x`.
    ///
    /// Pressing while another session is active replaces that session.
    pub fn begin_drag(
        &mut self,
        handle: Handle,
        client_x: f64,
        geometry: &impl TrackGeometry,
    ) -> DragEvent {
        let position = compute_position(client_x, geometry.track_bounds());
        trace!(%handle, position, "drag begin");
        self.active = Some(handle);
        DragEvent::Moved { handle, position }
    }

    /// Report a move of the active handle, or `None` when idle.
    pub fn on_move(&mut self, client_x: f64, geometry: &impl TrackGeometry) -> Option<DragEvent> {
        let handle = self.active?;
        let position = compute_position(client_x, geometry.track_bounds());
        trace!(%handle, position, "drag move");
        Some(DragEvent::Moved { handle, position })
    }

    /// End the active session, or return `None` when idle.
    pub fn end_drag(&mut self) -> Option<DragEvent> {
        let handle = self.active.take()?;
        trace!(%handle, "drag end");
        Some(DragEvent::Ended(handle))
    }

    /// Abandon the active session, or return `None` when idle.
    ///
    /// Positions already reported stay applied; cancelation only closes the session.
    pub fn cancel(&mut self) -> Option<DragEvent> {
        let handle = self.active.take()?;
        trace!(%handle, "drag cancelled");
        Some(DragEvent::Cancelled(handle))
    }

    /// Dispatch a device event to the matching operation.
    ///
    /// Touch events with no active touch points are ignored.
    pub fn handle_event(
        &mut self,
        event: InputEvent<'_>,
        geometry: &impl TrackGeometry,
    ) -> Option<DragEvent> {
        match event {
            InputEvent::PointerDown { handle, point } => {
                Some(self.begin_drag(handle, point.x, geometry))
            }
            InputEvent::PointerMove { point } => self.on_move(point.x, geometry),
            InputEvent::PointerUp | InputEvent::TouchEnd => self.end_drag(),
            InputEvent::TouchStart { handle, touches } => {
                let Some(first) = touches.first() else {
                    trace!(%handle, "touch start without touch points ignored");
                    return None;
                };
                Some(self.begin_drag(handle, first.x, geometry))
            }
            InputEvent::TouchMove { touches } => {
                let Some(first) = touches.first() else {
                    trace!("touch move without touch points ignored");
                    return None;
                };
                self.on_move(first.x, geometry)
            }
            InputEvent::Cancel => self.cancel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    // Track at x = 100 with width 200.
    const TRACK: Rect = Rect::new(100.0, 0.0, 300.0, 20.0);

    fn moved(handle: Handle, position: f64) -> Option<DragEvent> {
        Some(DragEvent::Moved { handle, position })
    }

    #[test]
    fn position_is_linear_inside_track() {
        assert_eq!(compute_position(150.0, Some(TRACK)), 0.25);
        assert_eq!(compute_position(200.0, Some(TRACK)), 0.5);
        assert_eq!(compute_position(300.0, Some(TRACK)), 1.0);
    }

    #[test]
    fn position_clamps_outside_track() {
        assert_eq!(compute_position(50.0, Some(TRACK)), 0.0);
        assert_eq!(compute_position(400.0, Some(TRACK)), 1.0);
    }

    #[test]
    fn position_falls_back_to_zero_without_geometry() {
        assert_eq!(compute_position(150.0, None), 0.0);
        // Zero width.
        let flat = Rect::new(100.0, 0.0, 100.0, 20.0);
        assert_eq!(compute_position(150.0, Some(flat)), 0.0);
        assert_eq!(compute_position(f64::NAN, Some(TRACK)), 0.0);
    }

    #[test]
    fn position_accepts_unnormalized_bounds() {
        let flipped = Rect::new(300.0, 20.0, 100.0, 0.0);
        assert_eq!(compute_position(150.0, Some(flipped)), 0.25);
    }

    #[test]
    fn press_emits_position_immediately() {
        let mut t = DragTracker::new();
        assert!(!t.is_dragging());
        let ev = t.begin_drag(Handle::Min, 150.0, &TRACK);
        assert_eq!(
            ev,
            DragEvent::Moved {
                handle: Handle::Min,
                position: 0.25
            }
        );
        assert_eq!(t.active(), Some(Handle::Min));
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut t = DragTracker::new();
        assert_eq!(t.on_move(200.0, &TRACK), None);
        assert_eq!(t.end_drag(), None);
        assert_eq!(t.cancel(), None);
    }

    #[test]
    fn moves_follow_active_handle_in_order() {
        let mut t = DragTracker::new();
        let _ = t.begin_drag(Handle::Max, 300.0, &TRACK);
        let seq = [
            t.on_move(250.0, &TRACK),
            t.on_move(200.0, &TRACK),
            t.on_move(-1000.0, &TRACK),
        ];
        assert_eq!(
            seq,
            [
                moved(Handle::Max, 0.75),
                moved(Handle::Max, 0.5),
                moved(Handle::Max, 0.0),
            ]
        );
    }

    #[test]
    fn release_ends_session_once() {
        let mut t = DragTracker::new();
        let _ = t.begin_drag(Handle::Min, 120.0, &TRACK);
        assert_eq!(t.end_drag(), Some(DragEvent::Ended(Handle::Min)));
        assert_eq!(t.end_drag(), None);
        assert_eq!(t.on_move(200.0, &TRACK), None);
    }

    #[test]
    fn cancel_reports_cancelled() {
        let mut t = DragTracker::new();
        let _ = t.begin_drag(Handle::Max, 120.0, &TRACK);
        assert_eq!(t.cancel(), Some(DragEvent::Cancelled(Handle::Max)));
        assert!(!t.is_dragging());
    }

    #[test]
    fn repress_replaces_session() {
        let mut t = DragTracker::new();
        let _ = t.begin_drag(Handle::Min, 120.0, &TRACK);
        let _ = t.begin_drag(Handle::Max, 280.0, &TRACK);
        assert_eq!(t.active(), Some(Handle::Max));
        assert_eq!(t.on_move(200.0, &TRACK), moved(Handle::Max, 0.5));
    }

    #[test]
    fn pointer_events_route_through_handle_event() {
        let mut t = DragTracker::new();
        let down = InputEvent::PointerDown {
            handle: Handle::Min,
            point: Point::new(150.0, 500.0),
        };
        assert_eq!(t.handle_event(down, &TRACK), moved(Handle::Min, 0.25));
        let mv = InputEvent::PointerMove {
            point: Point::new(200.0, -40.0),
        };
        assert_eq!(t.handle_event(mv, &TRACK), moved(Handle::Min, 0.5));
        assert_eq!(
            t.handle_event(InputEvent::PointerUp, &TRACK),
            Some(DragEvent::Ended(Handle::Min))
        );
        // Release with no session is silent.
        assert_eq!(t.handle_event(InputEvent::PointerUp, &TRACK), None);
    }

    #[test]
    fn touch_events_mirror_pointer_events() {
        let mut t = DragTracker::new();
        let touches = [Point::new(150.0, 0.0), Point::new(290.0, 0.0)];
        let start = InputEvent::TouchStart {
            handle: Handle::Min,
            touches: &touches,
        };
        assert_eq!(t.handle_event(start, &TRACK), moved(Handle::Min, 0.25));
        let drag = [Point::new(250.0, 3.0)];
        let mv = InputEvent::TouchMove { touches: &drag };
        assert_eq!(t.handle_event(mv, &TRACK), moved(Handle::Min, 0.75));
        assert_eq!(
            t.handle_event(InputEvent::TouchEnd, &TRACK),
            Some(DragEvent::Ended(Handle::Min))
        );
    }

    #[test]
    fn empty_touch_lists_are_ignored() {
        let mut t = DragTracker::new();
        let start = InputEvent::TouchStart {
            handle: Handle::Max,
            touches: &[],
        };
        assert_eq!(t.handle_event(start, &TRACK), None);
        assert!(!t.is_dragging());

        let _ = t.begin_drag(Handle::Max, 200.0, &TRACK);
        let mv = InputEvent::TouchMove { touches: &[] };
        assert_eq!(t.handle_event(mv, &TRACK), None);
        assert_eq!(t.active(), Some(Handle::Max));
    }

    #[test]
    fn unmeasured_geometry_reports_zero() {
        let mut t = DragTracker::new();
        let unmeasured: Option<Rect> = None;
        assert_eq!(
            t.begin_drag(Handle::Max, 250.0, &unmeasured),
            DragEvent::Moved {
                handle: Handle::Max,
                position: 0.0
            }
        );
        assert!(t.is_dragging());
    }

    #[test]
    fn cancel_event_routes_to_cancel() {
        let mut t = DragTracker::new();
        let _ = t.begin_drag(Handle::Min, 200.0, &TRACK);
        assert_eq!(
            t.handle_event(InputEvent::Cancel, &TRACK),
            Some(DragEvent::Cancelled(Handle::Min))
        );
    }
}
