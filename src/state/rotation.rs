//! Cyclic rotation over the trace record catalog
//!
//! Pure state machine behind the evidence inspection panel. The panel owns an
//! `EvidenceRotation` in a signal and advances it from a timer; everything
//! here is synchronous and free of browser APIs so it can be tested natively.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use crate::error::{SiteError, SiteResult};
use crate::models::TraceRecord;

/// Rotation state: a fixed catalog plus the index of the active record
///
/// The catalog is set once at construction and never mutated. The phase is
/// mutated only by [`EvidenceRotation::tick`], which wraps modulo the catalog
/// size, so the index can never escape bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceRotation {
    records: Vec<TraceRecord>,
    phase: usize,
}

impl EvidenceRotation {
    /// Create a rotation over the given catalog, starting at the first record
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::EmptyCatalog`] if `records` is empty. Rejecting
    /// the empty catalog here keeps `tick` free of a zero-modulo case.
    pub fn new(records: Vec<TraceRecord>) -> SiteResult<Self> {
        if records.is_empty() {
            return Err(SiteError::EmptyCatalog);
        }
        Ok(Self { records, phase: 0 })
    }

    /// Advance to the next record, wrapping at the end of the catalog
    pub fn tick(&mut self) {
        self.phase = (self.phase + 1) % self.records.len();
    }

    /// The currently active record
    ///
    /// `None` is unreachable in practice because the constructor rejects
    /// empty catalogs, but indexing is avoided to keep this panic-free.
    #[must_use]
    pub fn current(&self) -> Option<&TraceRecord> {
        self.records.get(self.phase)
    }

    /// Index of the active record in the catalog
    #[must_use]
    pub const fn phase(&self) -> usize {
        self.phase
    }

    /// Number of records in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty (always false by construction)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full catalog, in rotation order
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }
}
