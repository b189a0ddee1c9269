//! Behavioral tests for the evidence rotation state machine

use crate::error::SiteError;
use crate::models::{sample_records, ImplementationStatus, TraceRecord};
use crate::state::EvidenceRotation;

// ============================================================================
// MOUNT AND GUARD BEHAVIORS
// ============================================================================

#[test]
fn given_empty_catalog_when_constructing_then_rotation_is_refused() {
    // Given/When
    let result = EvidenceRotation::new(Vec::new());

    // Then: the panel must never rotate over nothing
    assert_eq!(result, Err(SiteError::EmptyCatalog));
}

#[test]
fn given_fresh_rotation_when_inspected_then_first_record_is_active() -> Result<(), SiteError> {
    // Given
    let rotation = EvidenceRotation::new(sample_records())?;

    // Then
    assert_eq!(rotation.phase(), 0);
    assert_eq!(
        rotation.current().map(|r| r.id.as_str()),
        Some("REQ-AUTH-001")
    );
    Ok(())
}

// ============================================================================
// TICK BEHAVIORS
// ============================================================================

#[test]
fn given_k_ticks_when_counting_then_phase_equals_k_mod_catalog_size() -> Result<(), SiteError> {
    // Given
    let mut rotation = EvidenceRotation::new(sample_records())?;
    let len = rotation.len();

    // When/Then
    for k in 1..=50 {
        rotation.tick();
        assert_eq!(rotation.phase(), k % len);
    }
    Ok(())
}

#[test]
fn given_any_number_of_ticks_when_rotating_then_phase_never_escapes_bounds(
) -> Result<(), SiteError> {
    // Given
    let mut rotation = EvidenceRotation::new(sample_records())?;

    // When/Then
    for _ in 0..500 {
        rotation.tick();
        assert!(rotation.phase() < rotation.len());
        assert!(rotation.current().is_some());
    }
    Ok(())
}

#[test]
fn given_full_cycle_when_rotating_then_sequence_repeats_exactly() -> Result<(), SiteError> {
    // Given
    let mut rotation = EvidenceRotation::new(sample_records())?;
    let len = rotation.len();

    // When
    let mut walk = |rotation: &mut EvidenceRotation| -> Vec<String> {
        (0..len)
            .filter_map(|_| {
                let id = rotation.current().map(|r| r.id.clone());
                rotation.tick();
                id
            })
            .collect()
    };
    let first = walk(&mut rotation);
    let second = walk(&mut rotation);

    // Then: rotation is periodic with period equal to the catalog size
    assert_eq!(first, second);
    Ok(())
}

// ============================================================================
// TWO-RECORD WALKTHROUGH
// ============================================================================

#[test]
fn given_two_record_catalog_when_walking_then_placeholder_and_evidence_alternate(
) -> Result<(), SiteError> {
    // Given: A has no evidence, B cites one span
    let catalog = vec![
        TraceRecord::new("REQ-A", "First requirement")
            .with_status(ImplementationStatus::FullyImplemented),
        TraceRecord::new("REQ-B", "Second requirement")
            .with_evidence_span("x:1-2")
            .with_status(ImplementationStatus::Missing),
    ];
    let mut rotation = EvidenceRotation::new(catalog)?;

    // Then: at mount, A is active and renders the placeholder branch
    let active = rotation.current().ok_or(SiteError::EmptyCatalog)?;
    assert_eq!(active.id, "REQ-A");
    assert!(!active.has_evidence());

    // When: one tick
    rotation.tick();
    let active = rotation.current().ok_or(SiteError::EmptyCatalog)?;
    assert_eq!(active.id, "REQ-B");
    assert_eq!(active.evidence, vec!["x:1-2".to_string()]);

    // When: a second tick wraps back to A
    rotation.tick();
    let active = rotation.current().ok_or(SiteError::EmptyCatalog)?;
    assert_eq!(active.id, "REQ-A");
    Ok(())
}
