//! Timing schedule for the evidence panel
//!
//! Each field of the active record fades in at a fixed offset after the
//! rotation advances, so a record always "types itself out" in the same
//! order: id, context, evidence, reasoning, confidence, classification.

/// Milliseconds between rotation ticks
pub const ROTATION_PERIOD_MS: u64 = 6_000;

/// A field of the record card, in reveal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    /// Requirement identifier
    RecordId,
    /// Requirement text
    Context,
    /// Cited evidence spans (or the empty-state placeholder)
    Evidence,
    /// Reasoning prose
    Reasoning,
    /// Confidence bar
    Confidence,
    /// Status classification badge
    Classification,
}

impl RevealStage {
    /// All stages in reveal order
    pub const ALL: [Self; 6] = [
        Self::RecordId,
        Self::Context,
        Self::Evidence,
        Self::Reasoning,
        Self::Confidence,
        Self::Classification,
    ];

    /// Delay from the moment the active record changes, in milliseconds
    #[must_use]
    pub const fn offset_ms(&self) -> u64 {
        match self {
            Self::RecordId => 0,
            Self::Context => 150,
            Self::Evidence => 350,
            Self::Reasoning => 600,
            Self::Confidence => 800,
            Self::Classification => 950,
        }
    }

    /// Inline style applying this stage's animation delay
    #[must_use]
    pub fn delay_style(&self) -> String {
        format!("animation-delay: {}ms;", self.offset_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_reveal_in_strictly_increasing_order() {
        let offsets: Vec<u64> = RevealStage::ALL.iter().map(RevealStage::offset_ms).collect();
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1], "offsets must strictly increase: {pair:?}");
        }
    }

    #[test]
    fn test_record_id_reveals_immediately() {
        assert_eq!(RevealStage::RecordId.offset_ms(), 0);
    }

    #[test]
    fn test_all_stages_finish_within_one_period() {
        for stage in RevealStage::ALL {
            assert!(
                stage.offset_ms() < ROTATION_PERIOD_MS,
                "{stage:?} must reveal before the next tick"
            );
        }
    }

    #[test]
    fn test_delay_style_format() {
        assert_eq!(RevealStage::RecordId.delay_style(), "animation-delay: 0ms;");
        assert_eq!(
            RevealStage::Evidence.delay_style(),
            "animation-delay: 350ms;"
        );
    }
}
