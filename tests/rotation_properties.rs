#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use proptest::prelude::*;
use tracelens_site::error::SiteError;
use tracelens_site::models::TraceRecord;
use tracelens_site::state::EvidenceRotation;

fn generated_catalog(n: usize) -> Vec<TraceRecord> {
    (0..n)
        .map(|i| TraceRecord::new(format!("REQ-{i:03}"), "Generated requirement"))
        .collect()
}

/// The empty catalog is the one construction-time failure
#[test]
fn test_empty_catalog_is_refused() {
    assert_eq!(
        EvidenceRotation::new(Vec::new()),
        Err(SiteError::EmptyCatalog)
    );
}

/// Property test: after k ticks the phase is exactly k mod catalog size
proptest! {
    #[test]
    fn prop_phase_equals_ticks_mod_len(n in 1..=8usize, k in 0..=300usize) {
        if let Ok(mut rotation) = EvidenceRotation::new(generated_catalog(n)) {
            for _ in 0..k {
                rotation.tick();
            }
            prop_assert_eq!(rotation.phase(), k % n);
        } else {
            prop_assert!(false, "non-empty catalog must be accepted");
        }
    }
}

/// Property test: the phase never escapes the catalog bounds
proptest! {
    #[test]
    fn prop_phase_always_in_bounds(n in 1..=8usize, k in 0..=300usize) {
        if let Ok(mut rotation) = EvidenceRotation::new(generated_catalog(n)) {
            for _ in 0..k {
                rotation.tick();
                prop_assert!(rotation.phase() < n);
            }
        } else {
            prop_assert!(false, "non-empty catalog must be accepted");
        }
    }
}

/// Property test: there is always an active record to render
proptest! {
    #[test]
    fn prop_current_record_always_exists(n in 1..=8usize, k in 0..=300usize) {
        if let Ok(mut rotation) = EvidenceRotation::new(generated_catalog(n)) {
            prop_assert!(rotation.current().is_some());
            for _ in 0..k {
                rotation.tick();
                prop_assert!(rotation.current().is_some());
            }
        } else {
            prop_assert!(false, "non-empty catalog must be accepted");
        }
    }
}

/// Property test: the displayed sequence repeats after exactly one full cycle
proptest! {
    #[test]
    fn prop_rotation_periodic_in_catalog_size(n in 1..=8usize) {
        if let Ok(mut rotation) = EvidenceRotation::new(generated_catalog(n)) {
            let mut cycle = |rotation: &mut EvidenceRotation| -> Vec<String> {
                (0..n)
                    .filter_map(|_| {
                        let id = rotation.current().map(|r| r.id.clone());
                        rotation.tick();
                        id
                    })
                    .collect()
            };
            let first = cycle(&mut rotation);
            let second = cycle(&mut rotation);
            prop_assert_eq!(first, second);
        } else {
            prop_assert!(false, "non-empty catalog must be accepted");
        }
    }
}

/// Property test: the confidence bar width stays within [0, 100] for any input
proptest! {
    #[test]
    fn prop_confidence_percent_always_bounded(confidence in -10.0..=10.0f32) {
        let record = TraceRecord::new("REQ-X", "Bounds").with_confidence(confidence);
        let percent = record.confidence_percent();
        prop_assert!((0.0..=100.0).contains(&percent));
    }
}

/// Property test: in-range confidences scale linearly to percent
proptest! {
    #[test]
    fn prop_confidence_percent_scales_in_range(confidence in 0.0..=1.0f32) {
        let record = TraceRecord::new("REQ-Y", "Scaling").with_confidence(confidence);
        let percent = record.confidence_percent();
        prop_assert!((percent - confidence * 100.0).abs() < 1e-3);
    }
}
