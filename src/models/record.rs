//! Trace record model for the evidence inspection panel
//!
//! One record is the distilled verdict for a single requirement: the code
//! spans cited as evidence, the reasoning behind the verdict, and the
//! classification the analysis settled on.

use serde::{Deserialize, Serialize};

/// Classification assigned to a requirement after evidence review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationStatus {
    /// Every obligation in the requirement is covered by cited code
    FullyImplemented,
    /// Some obligations are covered, the rest have no supporting spans
    PartiallyImplemented,
    /// No implementing artifact was found
    #[default]
    Missing,
}

impl ImplementationStatus {
    /// Get CSS class for styling
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::FullyImplemented => "status-implemented",
            Self::PartiallyImplemented => "status-partial",
            Self::Missing => "status-missing",
        }
    }

    /// Get icon character for display
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::FullyImplemented => "●",
            Self::PartiallyImplemented => "◐",
            Self::Missing => "✕",
        }
    }

    /// Get color for the status
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::FullyImplemented => "#10b981",     // emerald-500
            Self::PartiallyImplemented => "#f59e0b", // amber-500
            Self::Missing => "#ef4444",              // red-500
        }
    }

    /// Get the display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FullyImplemented => "Fully Implemented",
            Self::PartiallyImplemented => "Partially Implemented",
            Self::Missing => "Missing",
        }
    }
}

impl std::fmt::Display for ImplementationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullyImplemented => write!(f, "fully_implemented"),
            Self::PartiallyImplemented => write!(f, "partially_implemented"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// A single requirement-to-code trace shown by the inspection panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Requirement identifier (e.g., "REQ-AUTH-001")
    pub id: String,
    /// Requirement text as written in the source document
    pub context: String,
    /// Code spans cited as evidence, formatted "path:start-end"
    pub evidence: Vec<String>,
    /// Prose justification for the classification
    pub reasoning: String,
    /// Confidence score in [0.0, 1.0]
    pub confidence: f32,
    /// Final classification
    pub status: ImplementationStatus,
}

impl TraceRecord {
    /// Creates a new record with minimal required fields
    pub fn new(id: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context: context.into(),
            evidence: Vec::new(),
            reasoning: String::new(),
            confidence: 0.0,
            status: ImplementationStatus::default(),
        }
    }

    /// Builder: set the full evidence list
    pub fn with_evidence(mut self, evidence: Vec<String>) -> Self {
        self.evidence = evidence;
        self
    }

    /// Builder: add a single evidence span
    pub fn with_evidence_span(mut self, span: impl Into<String>) -> Self {
        self.evidence.push(span.into());
        self
    }

    /// Builder: set reasoning
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Builder: set confidence
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Builder: set status
    pub fn with_status(mut self, status: ImplementationStatus) -> Self {
        self.status = status;
        self
    }

    /// Check if any evidence spans were cited
    #[must_use]
    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }

    /// Confidence as a percentage, clamped to [0, 100] for bar widths
    #[must_use]
    pub fn confidence_percent(&self) -> f32 {
        (self.confidence * 100.0).clamp(0.0, 100.0)
    }
}
