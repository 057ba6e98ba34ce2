//! Stress classification.
//!
//! The classification is derived, never stored: a pure function of the latest
//! stress reading rounded to two decimal places, so the banner always agrees
//! with the displayed number.

use serde::{Deserialize, Serialize};

/// Display classification for a stress reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Normal,
    Mild,
    High,
    VeryHigh,
    /// No determinable reading; the banner falls back to the placeholder.
    Undetermined,
}

impl StressLevel {
    /// Classify a raw stress reading.
    ///
    /// Thresholds apply to the value rounded to two decimals, matching the
    /// displayed number: `<1.5` Normal, `[1.5,2.5)` Mild, `[2.5,3.5)` High,
    /// `≥3.5` VeryHigh. `NaN` is undetermined.
    pub fn from_stress(stress: f64) -> Self {
        if stress.is_nan() {
            return StressLevel::Undetermined;
        }
        let rounded = (stress * 100.0).round() / 100.0;
        if rounded < 1.5 {
            StressLevel::Normal
        } else if rounded < 2.5 {
            StressLevel::Mild
        } else if rounded < 3.5 {
            StressLevel::High
        } else {
            StressLevel::VeryHigh
        }
    }

    /// Banner text for this level.
    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Normal => "Normal",
            StressLevel::Mild => "Mild",
            StressLevel::High => "High",
            StressLevel::VeryHigh => "Very High",
            StressLevel::Undetermined => crate::formatting::PLACEHOLDER,
        }
    }
}

impl Default for StressLevel {
    fn default() -> Self {
        StressLevel::Undetermined
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_covers_all_bands() {
        let cases = [
            (0.0, StressLevel::Normal),
            (1.49, StressLevel::Normal),
            (1.5, StressLevel::Mild),
            (2.5, StressLevel::High),
            (3.49, StressLevel::High),
            (3.5, StressLevel::VeryHigh),
            (10.0, StressLevel::VeryHigh),
        ];
        for (input, expected) in cases {
            assert_eq!(
                StressLevel::from_stress(input),
                expected,
                "input {input} misclassified"
            );
        }
    }

    #[test]
    fn test_classification_uses_rounded_value() {
        // 1.4949 rounds to 1.49 → Normal; 1.4961 rounds to 1.50 → Mild.
        assert_eq!(StressLevel::from_stress(1.4949), StressLevel::Normal);
        assert_eq!(StressLevel::from_stress(1.4961), StressLevel::Mild);
    }

    #[test]
    fn test_nan_is_undetermined() {
        assert_eq!(StressLevel::from_stress(f64::NAN), StressLevel::Undetermined);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StressLevel::Normal.label(), "Normal");
        assert_eq!(StressLevel::Mild.label(), "Mild");
        assert_eq!(StressLevel::High.label(), "High");
        assert_eq!(StressLevel::VeryHigh.label(), "Very High");
        assert_eq!(StressLevel::Undetermined.label(), "---");
    }

    #[test]
    fn test_default_is_undetermined() {
        assert_eq!(StressLevel::default(), StressLevel::Undetermined);
    }
}
