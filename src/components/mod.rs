//! Leptos components for the landing site

pub mod evidence_panel;
pub mod matrix;
pub mod reveal;
pub mod status_badge;

pub use evidence_panel::{EvidencePanel, EVIDENCE_EMPTY_PLACEHOLDER};
pub use matrix::MatrixSection;
pub use reveal::{RevealStage, ROTATION_PERIOD_MS};
pub use status_badge::StatusBadge;
