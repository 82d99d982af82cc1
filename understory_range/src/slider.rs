// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A two-handle slider driver.
//!
//! [`RangeSlider`] owns one [`DragTracker`], one [`Reconciler`], one
//! [`LabelEditor`], and a [`ValueFormatter`]. A presentation layer forwards
//! device events and label interactions to it and renders handle positions
//! and label text from it. Nothing here draws.

use alloc::string::String;
use understory_drag::tracker::DragTracker;
use understory_drag::types::{DragEvent, Handle, InputEvent, TrackGeometry};

use crate::config::RangeConfig;
use crate::edit::{EditKey, LabelEditor};
use crate::error::ConfigError;
use crate::format::ValueFormatter;
use crate::reconciler::{ChangeSink, LabelEdit, NoSink, Reconciler};
use crate::state::{RangeState, RangeValues};

/// Drag tracking, value reconciliation, and label editing for one slider.
///
/// ## Example
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_drag::types::{Handle, InputEvent};
/// use understory_range::config::RangeBounds;
/// use understory_range::slider::RangeSlider;
/// use understory_range::state::RangeValues;
///
/// let bounds = RangeBounds { min: 0.0, max: 100.0 };
/// let mut slider = RangeSlider::new(bounds, Vec::<RangeValues>::new()).unwrap();
/// let track = Rect::new(0.0, 0.0, 400.0, 8.0);
///
/// let press = InputEvent::PointerDown { handle: Handle::Min, point: Point::new(200.0, 4.0) };
/// let _ = slider.handle_input(press, &track);
/// let _ = slider.handle_input(InputEvent::PointerUp, &track);
///
/// assert_eq!(slider.label_text(Handle::Min), "50.00€");
/// assert_eq!(
///     slider.into_sink(),
///     [RangeValues::new(0.0, 100.0), RangeValues::new(50.0, 100.0)]
/// );
/// ```
pub struct RangeSlider<S: ChangeSink = NoSink> {
    tracker: DragTracker,
    reconciler: Reconciler<S>,
    editor: LabelEditor,
    formatter: ValueFormatter,
}

impl<S: ChangeSink> core::fmt::Debug for RangeSlider<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeSlider")
            .field("tracker", &self.tracker)
            .field("reconciler", &self.reconciler)
            .field("editor", &self.editor)
            .field("formatter", &self.formatter)
            .finish()
    }
}

impl<S: ChangeSink> RangeSlider<S> {
    /// Validate `config` and build the slider; `sink` receives the initial values.
    pub fn new(config: impl Into<RangeConfig>, sink: S) -> Result<Self, ConfigError> {
        let config = config.into();
        let formatter = ValueFormatter::new(config.currency());
        Ok(Self {
            tracker: DragTracker::new(),
            reconciler: Reconciler::new(config, sink)?,
            editor: LabelEditor::new(),
            formatter,
        })
    }

    /// Forward a device event. Moves of the active handle update the values.
    pub fn handle_input(
        &mut self,
        event: InputEvent<'_>,
        geometry: &impl TrackGeometry,
    ) -> Option<DragEvent> {
        let drag = self.tracker.handle_event(event, geometry)?;
        let _ = self.reconciler.apply_drag_event(drag);
        Some(drag)
    }

    /// The handle being dragged, for styling.
    pub fn active_handle(&self) -> Option<Handle> {
        self.tracker.active()
    }

    /// The current `{min, max}` pair.
    pub fn values(&self) -> RangeValues {
        self.reconciler.values()
    }

    /// Values and handle positions.
    pub fn state(&self) -> &RangeState {
        self.reconciler.state()
    }

    /// The underlying reconciler.
    pub fn reconciler(&self) -> &Reconciler<S> {
        &self.reconciler
    }

    /// The label formatter.
    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    /// Formatted label for `handle`, e.g. `25.00€`.
    pub fn label_text(&self, handle: Handle) -> String {
        self.formatter.format(self.reconciler.state().value(handle))
    }

    /// Both labels as `min - max`.
    pub fn range_text(&self) -> String {
        self.formatter.format_range(self.values())
    }

    /// The handle whose label is open, if any.
    pub fn editing(&self) -> Option<Handle> {
        self.editor.editing()
    }

    /// Pending label text, if a label is open.
    pub fn pending_text(&self) -> Option<&str> {
        self.editor.pending()
    }

    /// Open the label of `handle`. Returns `false` for discrete ranges.
    pub fn activate_label(&mut self, handle: Handle) -> bool {
        self.editor.activate(handle, &mut self.reconciler)
    }

    /// Replace the pending label text.
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.editor.set_pending(text);
    }

    /// Forward a key press to the open label.
    pub fn label_key(&mut self, key: EditKey) -> Option<LabelEdit> {
        self.editor.handle_key(key, &mut self.reconciler)
    }

    /// The open label lost focus: commit it.
    pub fn blur_label(&mut self) -> Option<LabelEdit> {
        self.editor.commit(&mut self.reconciler)
    }

    /// Consume the slider, returning its sink.
    pub fn into_sink(self) -> S {
        self.reconciler.into_sink()
    }
}
