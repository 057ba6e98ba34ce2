//! Reading slots: the display state for the three value labels.
//!
//! An explicit value holding the current label texts, consumed by a pure
//! render function; no widget is ever mutated in place.

use serde::{Deserialize, Serialize};

use crate::classify::StressLevel;
use crate::formatting::{self, PLACEHOLDER};
use crate::models::Estimate;

/// Current display text for each vitals slot plus the stress classification.
///
/// Carries the retained-previous-text rule: a negative reading leaves the
/// slot unchanged rather than overwriting it. A persistently negative reading
/// can therefore keep stale data on screen; the session controller clears the
/// slots whenever the subject is lost, which bounds how long stale values
/// survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingSlots {
    /// Heart-rate slot text (BPM, one decimal).
    pub heart_rate: String,
    /// HRV slot text (whole milliseconds).
    pub hrv: String,
    /// Stress slot text (two decimals).
    pub stress: String,
    /// Classification derived from the stress slot.
    pub classification: StressLevel,
}

impl ReadingSlots {
    /// Reset every slot to the placeholder and clear the classification.
    pub fn clear(&mut self) {
        self.heart_rate = PLACEHOLDER.to_string();
        self.hrv = PLACEHOLDER.to_string();
        self.stress = PLACEHOLDER.to_string();
        self.classification = StressLevel::Undetermined;
    }

    /// Apply a publishable estimate to the slots.
    ///
    /// Each reading is handled independently: negative readings retain the
    /// previous text, `NaN` renders literally, and a `NaN` stress reading
    /// additionally clears the classification.
    pub fn apply(&mut self, estimate: &Estimate) {
        if let Some(text) = formatting::format_heart_rate(estimate.heart_rate) {
            self.heart_rate = text;
        }
        if let Some(text) = formatting::format_hrv(estimate.hrv) {
            self.hrv = text;
        }
        if let Some(text) = formatting::format_stress(estimate.stress) {
            self.stress = text;
            self.classification = StressLevel::from_stress(estimate.stress);
        }
    }
}

impl Default for ReadingSlots {
    fn default() -> Self {
        Self {
            heart_rate: PLACEHOLDER.to_string(),
            hrv: PLACEHOLDER.to_string(),
            stress: PLACEHOLDER.to_string(),
            classification: StressLevel::Undetermined,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusCode;

    fn full(hr: f64, hrv: f64, stress: f64) -> Estimate {
        Estimate::with_readings(StatusCode::FullResults, hr, hrv, stress)
    }

    #[test]
    fn test_default_slots_are_placeholders() {
        let slots = ReadingSlots::default();
        assert_eq!(slots.heart_rate, "---");
        assert_eq!(slots.hrv, "---");
        assert_eq!(slots.stress, "---");
        assert_eq!(slots.classification, StressLevel::Undetermined);
    }

    #[test]
    fn test_apply_publishes_all_readings() {
        let mut slots = ReadingSlots::default();
        slots.apply(&full(71.96, 0.0482, 1.87));
        assert_eq!(slots.heart_rate, "72.0");
        assert_eq!(slots.hrv, "48");
        assert_eq!(slots.stress, "1.87");
        assert_eq!(slots.classification, StressLevel::Mild);
    }

    #[test]
    fn test_negative_reading_retains_previous_text() {
        let mut slots = ReadingSlots::default();
        slots.apply(&full(65.0, 0.06, 1.0));

        slots.apply(&full(-1.0, -1.0, -1.0));
        assert_eq!(slots.heart_rate, "65.0");
        assert_eq!(slots.hrv, "60");
        assert_eq!(slots.stress, "1.00");
        assert_eq!(slots.classification, StressLevel::Normal);
    }

    #[test]
    fn test_negative_reading_retains_placeholder_too() {
        let mut slots = ReadingSlots::default();
        slots.apply(&full(-1.0, -1.0, -1.0));
        assert_eq!(slots.heart_rate, "---");
        assert_eq!(slots.stress, "---");
    }

    #[test]
    fn test_nan_renders_literally() {
        let mut slots = ReadingSlots::default();
        slots.apply(&full(f64::NAN, f64::NAN, 2.0));
        assert_eq!(slots.heart_rate, "NaN");
        assert_eq!(slots.hrv, "NaN");
        assert_eq!(slots.stress, "2.00");
    }

    #[test]
    fn test_nan_stress_clears_classification() {
        let mut slots = ReadingSlots::default();
        slots.apply(&full(70.0, 0.05, 3.9));
        assert_eq!(slots.classification, StressLevel::VeryHigh);

        slots.apply(&full(70.0, 0.05, f64::NAN));
        assert_eq!(slots.stress, "NaN");
        assert_eq!(slots.classification, StressLevel::Undetermined);
    }

    #[test]
    fn test_readings_handled_independently() {
        let mut slots = ReadingSlots::default();
        slots.apply(&full(60.0, 0.05, 1.0));

        // Only heart rate is negative; the other two still update.
        slots.apply(&full(-5.0, 0.07, 2.6));
        assert_eq!(slots.heart_rate, "60.0");
        assert_eq!(slots.hrv, "70");
        assert_eq!(slots.stress, "2.60");
        assert_eq!(slots.classification, StressLevel::High);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut slots = ReadingSlots::default();
        slots.apply(&full(60.0, 0.05, 4.0));
        slots.clear();
        assert_eq!(slots, ReadingSlots::default());
    }
}
