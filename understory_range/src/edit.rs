// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label edit sessions: `Idle → Editing(handle) → Idle`.
//!
//! ## Usage
//!
//! 1) On label activation, call [`LabelEditor::activate`]. The pending text is
//!    seeded with the handle's current value.
//! 2) Forward typed text with [`LabelEditor::set_pending`].
//! 3) On Enter or focus loss, call [`LabelEditor::commit`]; on Escape, [`LabelEditor::cancel`].
//!    [`LabelEditor::handle_key`] maps both keys for you.
//!
//! Only continuous ranges are editable; activation is refused otherwise.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drag::types::Handle;
//! use understory_range::config::ContinuousConfig;
//! use understory_range::edit::{EditKey, LabelEditor};
//! use understory_range::reconciler::{NoSink, Reconciler};
//!
//! let mut range = Reconciler::new(ContinuousConfig::new(0.0, 100.0), NoSink).unwrap();
//! let mut editor = LabelEditor::new();
//!
//! assert!(editor.activate(Handle::Min, &mut range));
//! assert_eq!(editor.pending(), Some("0"));
//! editor.set_pending("30");
//! let _ = editor.handle_key(EditKey::Enter, &mut range);
//! assert_eq!(range.values().min, 30.0);
//! assert_eq!(editor.editing(), None);
//! ```

use alloc::string::String;
use tracing::debug;
use understory_drag::types::Handle;

use crate::reconciler::{ChangeSink, LabelEdit, Reconciler};

/// Where an edit session stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    /// No label is being edited.
    #[default]
    Idle,
    /// The label of `handle` is being edited, with `pending` text typed so far.
    Editing {
        /// The handle whose label is open.
        handle: Handle,
        /// Text typed so far.
        pending: String,
    },
}

/// Keys with a meaning for an open edit field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditKey {
    /// Commit the pending text.
    Enter,
    /// Discard the pending text.
    Escape,
}

/// Drives a single label edit session at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelEditor {
    state: EditState,
}

impl LabelEditor {
    /// An idle editor.
    pub const fn new() -> Self {
        Self {
            state: EditState::Idle,
        }
    }

    /// The session state.
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// The handle whose label is open, if any.
    pub fn editing(&self) -> Option<Handle> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing { handle, .. } => Some(*handle),
        }
    }

    /// Text typed so far, if a session is open.
    pub fn pending(&self) -> Option<&str> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing { pending, .. } => Some(pending.as_str()),
        }
    }

    /// Open the label of `handle` for editing.
    ///
    /// Returns `false` (and stays idle) when the range is not editable.
    /// An open session on the other label is committed first, as focus moving
    /// between fields would.
    pub fn activate<S: ChangeSink>(&mut self, handle: Handle, range: &mut Reconciler<S>) -> bool {
        if !range.mode().is_editable() {
            return false;
        }
        if self.editing().is_some_and(|open| open != handle) {
            let _ = self.commit(range);
        }
        if self.editing() == Some(handle) {
            return true;
        }
        debug!(%handle, "label edit opened");
        self.state = EditState::Editing {
            handle,
            pending: range.editable_text(handle),
        };
        true
    }

    /// Replace the pending text. Ignored when idle.
    pub fn set_pending(&mut self, text: impl Into<String>) {
        if let EditState::Editing { pending, .. } = &mut self.state {
            *pending = text.into();
        }
    }

    /// Close the session, applying the pending text to `range`.
    ///
    /// Returns `None` when idle.
    pub fn commit<S: ChangeSink>(&mut self, range: &mut Reconciler<S>) -> Option<LabelEdit> {
        let EditState::Editing { handle, pending } = core::mem::take(&mut self.state) else {
            return None;
        };
        let outcome = range.apply_label_edit(handle, &pending);
        debug!(%handle, ?outcome, "label edit committed");
        Some(outcome)
    }

    /// Close the session without touching any value.
    ///
    /// Returns `false` when already idle.
    pub fn cancel(&mut self) -> bool {
        match core::mem::take(&mut self.state) {
            EditState::Idle => false,
            EditState::Editing { handle, .. } => {
                debug!(%handle, "label edit cancelled");
                true
            }
        }
    }

    /// Enter commits, Escape cancels. Returns the commit outcome, if any.
    pub fn handle_key<S: ChangeSink>(
        &mut self,
        key: EditKey,
        range: &mut Reconciler<S>,
    ) -> Option<LabelEdit> {
        match key {
            EditKey::Enter => self.commit(range),
            EditKey::Escape => {
                let _ = self.cancel();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContinuousConfig, DiscreteConfig};
    use crate::reconciler::NoSink;
    use crate::state::RangeValues;
    use alloc::vec::Vec;

    fn range(min: f64, max: f64) -> Reconciler<Vec<RangeValues>> {
        let config = ContinuousConfig::new(0.0, 100.0)
            .with_initial_min(min)
            .with_initial_max(max);
        Reconciler::new(config, Vec::new()).unwrap()
    }

    #[test]
    fn activation_seeds_current_value() {
        let mut r = range(25.0, 75.0);
        let mut e = LabelEditor::new();
        assert!(e.activate(Handle::Max, &mut r));
        assert_eq!(e.editing(), Some(Handle::Max));
        assert_eq!(e.pending(), Some("75"));
    }

    #[test]
    fn escape_cancels_without_mutation() {
        let mut r = range(0.0, 100.0);
        let mut e = LabelEditor::new();
        assert!(e.activate(Handle::Min, &mut r));
        e.set_pending("50");
        assert_eq!(e.handle_key(EditKey::Escape, &mut r), None);
        assert_eq!(e.state(), &EditState::Idle);
        assert_eq!(r.values(), RangeValues::new(0.0, 100.0));
        assert_eq!(r.sink().len(), 1);
    }

    #[test]
    fn enter_commits_pending_text() {
        let mut r = range(0.0, 100.0);
        let mut e = LabelEditor::new();
        assert!(e.activate(Handle::Min, &mut r));
        e.set_pending("30");
        assert_eq!(
            e.handle_key(EditKey::Enter, &mut r),
            Some(LabelEdit::Applied(RangeValues::new(30.0, 100.0)))
        );
        assert_eq!(e.editing(), None);
    }

    #[test]
    fn commit_clamps_against_other_handle() {
        let mut r = range(25.0, 50.0);
        let mut e = LabelEditor::new();
        assert!(e.activate(Handle::Min, &mut r));
        e.set_pending("75");
        assert_eq!(
            e.commit(&mut r),
            Some(LabelEdit::Applied(RangeValues::new(49.0, 50.0)))
        );
    }

    #[test]
    fn unparseable_commit_keeps_value() {
        let mut r = range(25.0, 50.0);
        let mut e = LabelEditor::new();
        assert!(e.activate(Handle::Max, &mut r));
        e.set_pending("fifty");
        assert_eq!(e.commit(&mut r), Some(LabelEdit::Discarded));
        assert_eq!(r.values().max, 50.0);
        assert_eq!(e.editing(), None);
    }

    #[test]
    fn idle_operations_are_noops() {
        let mut r = range(0.0, 100.0);
        let mut e = LabelEditor::new();
        e.set_pending("10");
        assert_eq!(e.pending(), None);
        assert_eq!(e.commit(&mut r), None);
        assert!(!e.cancel());
        assert_eq!(e.handle_key(EditKey::Enter, &mut r), None);
    }

    #[test]
    fn switching_labels_commits_the_open_one() {
        let mut r = range(0.0, 100.0);
        let mut e = LabelEditor::new();
        assert!(e.activate(Handle::Min, &mut r));
        e.set_pending("20");
        assert!(e.activate(Handle::Max, &mut r));
        assert_eq!(r.values().min, 20.0);
        assert_eq!(e.editing(), Some(Handle::Max));
        assert_eq!(e.pending(), Some("100"));
    }

    #[test]
    fn reactivating_the_same_label_keeps_pending_text() {
        let mut r = range(0.0, 100.0);
        let mut e = LabelEditor::new();
        assert!(e.activate(Handle::Min, &mut r));
        e.set_pending("42");
        assert!(e.activate(Handle::Min, &mut r));
        assert_eq!(e.pending(), Some("42"));
    }

    #[test]
    fn discrete_labels_are_not_editable() {
        let mut r = Reconciler::new(DiscreteConfig::new([1.99, 5.99, 10.99]), NoSink).unwrap();
        let mut e = LabelEditor::new();
        assert!(!e.activate(Handle::Min, &mut r));
        assert_eq!(e.state(), &EditState::Idle);
    }
}
