//! Gallery/lightbox viewer state.
//!
//! A [`Lightbox`] tracks the currently open position within an ordered
//! photo sequence and supports sequential navigation. Boundary policy is
//! clamping: `previous` on the first photo and `next` on the last photo
//! stay in place rather than wrapping around.

use thiserror::Error;

/// Errors from lightbox operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("Photo index {index} is out of bounds for a sequence of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Keyboard keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Overlay viewer state over an ordered photo sequence of known length.
///
/// Invariant: the open index is always `None` or a valid index into the
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    open: Option<usize>,
}

impl Lightbox {
    /// Creates a closed viewer over a sequence of `len` photos.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// The currently open index, if the overlay is showing.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Length of the photo sequence the viewer navigates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Opens the overlay at `index`.
    pub fn open(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len {
            return Err(GalleryError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.open = Some(index);
        Ok(())
    }

    /// Closes the overlay.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Steps to the previous photo; stays on the first photo at the
    /// boundary. No-op while closed.
    pub fn previous(&mut self) {
        if let Some(index) = self.open {
            if index > 0 {
                self.open = Some(index - 1);
            }
        }
    }

    /// Steps to the next photo; stays on the last photo at the boundary.
    /// No-op while closed.
    pub fn next(&mut self) {
        if let Some(index) = self.open {
            if index + 1 < self.len {
                self.open = Some(index + 1);
            }
        }
    }

    /// Whether a `previous` step would move (drives prev-button visibility).
    pub fn has_previous(&self) -> bool {
        matches!(self.open, Some(index) if index > 0)
    }

    /// Whether a `next` step would move (drives next-button visibility).
    pub fn has_next(&self) -> bool {
        matches!(self.open, Some(index) if index + 1 < self.len)
    }

    /// Applies the viewer's keyboard contract.
    pub fn apply_key(&mut self, key: NavKey) {
        match key {
            NavKey::Escape => self.close(),
            NavKey::ArrowLeft => self.previous(),
            NavKey::ArrowRight => self.next(),
        }
    }

    /// Adjusts the viewer after the underlying sequence changed length.
    ///
    /// A shrinking sequence clamps the open index to the new last photo;
    /// an empty sequence closes the overlay.
    pub fn resync(&mut self, new_len: usize) {
        self.len = new_len;
        if let Some(index) = self.open {
            if new_len == 0 {
                self.open = None;
            } else if index >= new_len {
                self.open = Some(new_len - 1);
            }
        }
    }
}
