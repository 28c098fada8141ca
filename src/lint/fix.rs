//! Fix descriptors.
//!
//! A [`Fix`] describes an automatic remediation as a single text edit over
//! byte offsets of the analyzed source. Rules attach fixes to problems;
//! nothing in this crate applies them.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A structured edit replacing `start..end` with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset.
    pub end: usize,
    /// Replacement text.
    pub text: String,
}

impl Fix {
    /// Replace a byte range with new text.
    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            start: range.start,
            end: range.end,
            text: text.into(),
        }
    }

    /// Remove a byte range.
    pub fn remove(range: Range<usize>) -> Self {
        Self::replace(range, String::new())
    }

    /// Insert text at a byte offset.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::replace(offset..offset, text)
    }

    /// The byte range this fix touches.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
