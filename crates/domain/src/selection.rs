//! Multi-select order/share flow over a group's photos.

use std::collections::HashSet;
use thiserror::Error;

/// Errors from bulk selection actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No photos selected")]
    EmptySelection,
}

/// A marked subset of photo ids within a group.
#[derive(Debug, Clone, Default)]
pub struct PhotoSelection {
    selected: HashSet<String>,
}

impl PhotoSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from an id list, deduplicating repeats.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds the photo if absent, removes it if present. Returns whether the
    /// photo is selected afterwards.
    pub fn toggle(&mut self, photo_id: &str) -> bool {
        if self.selected.remove(photo_id) {
            false
        } else {
            self.selected.insert(photo_id.to_string());
            true
        }
    }

    pub fn is_selected(&self, photo_id: &str) -> bool {
        self.selected.contains(photo_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Submits the selection as an order stub. Clears the selection and
    /// returns the ordered count; no real order is created.
    pub fn order(&mut self) -> Result<usize, SelectionError> {
        if self.selected.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        let count = self.selected.len();
        self.selected.clear();
        Ok(count)
    }

    /// Submits the selection as a share stub. Returns the shared count and
    /// keeps the selection; no real link is generated.
    pub fn share(&self) -> Result<usize, SelectionError> {
        if self.selected.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        Ok(self.selected.len())
    }
}
