//! Sample trace catalog for the landing page
//!
//! Fixed, compiled-in records shown by the inspection panel and the
//! traceability matrix. The catalog never changes at runtime; rotation only
//! selects which entry is active.

use super::record::{ImplementationStatus, TraceRecord};

/// Provides the sample records displayed on the site
pub fn sample_records() -> Vec<TraceRecord> {
    vec![
        TraceRecord::new("REQ-AUTH-001", "User authentication via OAuth 2.0")
            .with_evidence(vec![
                "src/auth/oauth_provider.py:45-78".into(),
                "src/middleware/auth.py:12-34".into(),
            ])
            .with_reasoning(
                "The OAuth 2.0 authentication flow is fully implemented across the \
                 authentication module and middleware layer. Token generation, validation, \
                 and refresh mechanisms match the specified authorization code grant type.",
            )
            .with_confidence(0.94)
            .with_status(ImplementationStatus::FullyImplemented),
        TraceRecord::new("REQ-DATA-012", "Real-time data validation pipeline")
            .with_evidence_span("src/pipeline/validators.py:88-140")
            .with_reasoning(
                "Schema validation covers the batch ingestion path, but the streaming \
                 path bypasses the validator entirely and no downstream re-validation \
                 was found.",
            )
            .with_confidence(0.71)
            .with_status(ImplementationStatus::PartiallyImplemented),
        TraceRecord::new("REQ-API-023", "Rate limiting for API endpoints")
            .with_evidence(vec![
                "src/api/rate_limiter.py:19-72".into(),
                "src/middleware/throttle.py:8-41".into(),
            ])
            .with_reasoning(
                "Token-bucket limiting is enforced at the gateway and per-route \
                 overrides are wired through the throttle middleware.",
            )
            .with_confidence(0.89)
            .with_status(ImplementationStatus::FullyImplemented),
        TraceRecord::new("REQ-SEC-008", "End-to-end encryption for data in transit")
            .with_reasoning(
                "No TLS termination, certificate handling, or transport encryption \
                 code was found in any of the scanned modules.",
            )
            .with_confidence(0.88)
            .with_status(ImplementationStatus::Missing),
    ]
}

/// Status counts for the traceability matrix summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageSummary {
    pub fully_implemented: usize,
    pub partially_implemented: usize,
    pub missing: usize,
}

impl CoverageSummary {
    /// Compute status counts from records
    pub fn from_records(records: &[TraceRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record.status {
                ImplementationStatus::FullyImplemented => summary.fully_implemented += 1,
                ImplementationStatus::PartiallyImplemented => summary.partially_implemented += 1,
                ImplementationStatus::Missing => summary.missing += 1,
            }
        }
        summary
    }

    /// Total count of all records
    pub fn total(&self) -> usize {
        self.fully_implemented + self.partially_implemented + self.missing
    }

    /// Count of records with at least partial coverage
    pub fn covered(&self) -> usize {
        self.fully_implemented + self.partially_implemented
    }

    /// Count of records with no implementing artifact
    pub fn gaps(&self) -> usize {
        self.missing
    }
}
