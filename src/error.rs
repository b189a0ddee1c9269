//! Error types for the site's interactive components
//!
//! The static page cannot fail; every failure mode belongs to the evidence
//! panel, and all of them are internal contract violations rather than
//! user-facing conditions.

use thiserror::Error;

/// Errors that can occur while wiring up the evidence panel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// The inspection catalog contained no records
    #[error("inspection catalog is empty: rotation needs at least one record")]
    EmptyCatalog,

    /// The rotation interval could not be scheduled
    #[error("rotation timer could not be scheduled: {0}")]
    TimerUnavailable(String),
}

/// Result type alias for site operations
pub type SiteResult<T> = Result<T, SiteError>;
