//! Snapshot-based undo/redo for an arbitrary in-memory model.

use super::snapshot::Snapshot;
use crate::error::Error;

/// Tracks the states of a model so changes can be rolled back.
///
/// The tracker owns the model; callers mutate it through [`get_mut`](Self::get_mut)
/// and call [`save_snapshot`](Self::save_snapshot) at the points they want to
/// return to. `M` must be cheap enough to clone for every saved snapshot, and
/// its `PartialEq` must compare the full state.
#[derive(Debug, Clone)]
pub struct ModelHistory<M> {
    model: M,
    initial: M,
    snapshots: Vec<Snapshot<M>>,
    /// Snapshots popped by undo, most recently undone last
    redo_stack: Vec<Snapshot<M>>,
}

impl<M: Clone + PartialEq> ModelHistory<M> {
    /// Start tracking `model`; its current value becomes the initial state
    pub fn new(model: M) -> Self {
        Self {
            initial: model.clone(),
            model,
            snapshots: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// The live model
    pub fn get(&self) -> &M {
        &self.model
    }

    /// Mutable access to the live model
    pub fn get_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Stop tracking and hand back the live model
    pub fn into_inner(self) -> M {
        self.model
    }

    pub fn initial_state(&self) -> &M {
        &self.initial
    }

    /// All saved snapshots, oldest first
    pub fn snapshots(&self) -> &[Snapshot<M>] {
        &self.snapshots
    }

    /// Tags of all saved snapshots, parallel to [`snapshots`](Self::snapshots)
    pub fn tags(&self) -> Vec<&str> {
        self.snapshots.iter().map(Snapshot::tag).collect()
    }

    /// The value undo falls back to first: top snapshot, or the initial state
    fn recorded(&self) -> &M {
        self.snapshots
            .last()
            .map_or(&self.initial, Snapshot::value)
    }

    /// True when the model has changed since the last recorded value
    pub fn is_dirty(&self) -> bool {
        self.model != *self.recorded()
    }

    pub fn is_undo_possible(&self) -> bool {
        self.is_dirty() || !self.snapshots.is_empty()
    }

    pub fn is_redo_possible(&self) -> bool {
        !self.redo_stack.is_empty() && !self.is_dirty()
    }

    /// Make the current model the new baseline and forget all snapshots
    pub fn set_initial_state(&mut self) {
        self.initial = self.model.clone();
        self.snapshots.clear();
        self.redo_stack.clear();
        tracing::debug!("History reset to a new initial state");
    }

    /// Record the current model state under `tag` (empty for untagged).
    ///
    /// Nothing is recorded when the model still equals the initial state and no
    /// snapshot exists yet, or when both the model and the tag equal the most
    /// recent snapshot. Returns whether a snapshot was pushed.
    pub fn save_snapshot(&mut self, tag: &str) -> bool {
        let unchanged = match self.snapshots.last() {
            None => self.model == self.initial,
            Some(top) => *top.value() == self.model && top.tag() == tag,
        };
        if unchanged {
            tracing::trace!("Snapshot skipped, model unchanged (tag: {:?})", tag);
            return false;
        }

        self.snapshots.push(Snapshot::new(self.model.clone(), tag));
        self.redo_stack.clear();
        tracing::trace!(
            "Snapshot saved (tag: {:?}, depth: {})",
            tag,
            self.snapshots.len()
        );
        true
    }

    /// Roll the model back.
    ///
    /// Unsaved changes are discarded first, leaving the stack untouched.
    /// Otherwise snapshots matching the current model are dropped and the model
    /// goes back to the next older snapshot, or to the initial state once the
    /// stack is empty. With `tags`, the rollback continues down to the most
    /// recent older snapshot carrying one of them; if none does, everything is
    /// undone. Returns false when there was nothing to undo.
    pub fn undo<S: AsRef<str>>(&mut self, tags: &[S]) -> bool {
        if self.is_dirty() {
            self.model = self.recorded().clone();
            tracing::debug!("Undo discarded unsaved changes");
            return true;
        }
        if self.snapshots.is_empty() {
            return false;
        }

        while self
            .snapshots
            .last()
            .is_some_and(|s| *s.value() == self.model)
        {
            self.pop_to_redo();
        }

        if !tags.is_empty() {
            while self
                .snapshots
                .last()
                .is_some_and(|s| !s.has_any_tag(tags))
            {
                self.pop_to_redo();
            }
        }

        self.model = self.recorded().clone();
        tracing::debug!("Undo restored snapshot depth {}", self.snapshots.len());
        true
    }

    /// Drop every snapshot and restore the initial state.
    ///
    /// Returns false when already at the initial state with no snapshots.
    pub fn undo_all(&mut self) -> bool {
        if self.snapshots.is_empty() && self.model == self.initial {
            return false;
        }
        while !self.snapshots.is_empty() {
            self.pop_to_redo();
        }
        self.model = self.initial.clone();
        tracing::debug!("Undo all restored the initial state");
        true
    }

    /// Re-apply the most recently undone snapshot.
    ///
    /// Refused while the model has unsaved changes. Snapshots that were undone
    /// together because they held the same value come back together.
    pub fn redo(&mut self) -> bool {
        if self.is_dirty() {
            tracing::trace!("Redo refused, model has unsaved changes");
            return false;
        }
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };

        self.snapshots.push(next);
        self.model = self.recorded().clone();
        while self
            .redo_stack
            .last()
            .is_some_and(|s| *s.value() == self.model)
        {
            if let Some(same) = self.redo_stack.pop() {
                self.snapshots.push(same);
            }
        }

        tracing::debug!("Redo restored snapshot depth {}", self.snapshots.len());
        true
    }

    /// Snapshots whose tag is one of `tags`, oldest first.
    ///
    /// Fails with [`Error::InvalidArgument`] when `tags` is empty.
    pub fn get_snapshots_by_tag<S: AsRef<str>>(
        &self,
        tags: &[S],
    ) -> Result<Vec<&Snapshot<M>>, Error> {
        if tags.is_empty() {
            return Err(Error::invalid_argument(
                "tags must be a non empty string array",
            ));
        }
        Ok(self
            .snapshots
            .iter()
            .filter(|s| s.has_any_tag(tags))
            .collect())
    }

    fn pop_to_redo(&mut self) {
        if let Some(snapshot) = self.snapshots.pop() {
            self.redo_stack.push(snapshot);
        }
    }
}
