//! Exact display formatting for vitals readings.
//!
//! These rules are compatibility-sensitive: a negative reading retains the
//! previous label text and `NaN` renders literally, so the reading formatters
//! return `Option<String>` where `None` means "keep whatever is on screen".

/// Placeholder shown in every value slot before the first reading arrives.
pub const PLACEHOLDER: &str = "---";

/// Format a heart-rate reading in BPM, rounded to one decimal place.
///
/// Returns `None` for negative readings (previous display retained) and the
/// literal `"NaN"` for undetermined readings.
///
/// # Examples
///
/// ```
/// use vitals_core::formatting::format_heart_rate;
///
/// assert_eq!(format_heart_rate(72.44), Some("72.4".to_string()));
/// assert_eq!(format_heart_rate(f64::NAN), Some("NaN".to_string()));
/// assert_eq!(format_heart_rate(-1.0), None);
/// ```
pub fn format_heart_rate(heart_rate: f64) -> Option<String> {
    if heart_rate < 0.0 {
        return None;
    }
    if heart_rate.is_nan() {
        Some("NaN".to_string())
    } else {
        Some(format!("{:.1}", (heart_rate * 10.0).round() / 10.0))
    }
}

/// Format an HRV reading (seconds) as whole milliseconds.
///
/// The engine reports HRV in seconds; the display shows `round(hrv * 1000)`.
/// Negative and `NaN` handling matches [`format_heart_rate`].
///
/// # Examples
///
/// ```
/// use vitals_core::formatting::format_hrv;
///
/// assert_eq!(format_hrv(0.0554), Some("55".to_string()));
/// assert_eq!(format_hrv(f64::NAN), Some("NaN".to_string()));
/// assert_eq!(format_hrv(-0.1), None);
/// ```
pub fn format_hrv(hrv: f64) -> Option<String> {
    if hrv < 0.0 {
        return None;
    }
    if hrv.is_nan() {
        Some("NaN".to_string())
    } else {
        Some(format!("{}", (hrv * 1000.0).round() as i64))
    }
}

/// Format a stress score rounded to two decimal places.
///
/// Negative and `NaN` handling matches [`format_heart_rate`]; the caller is
/// responsible for clearing the classification banner on `NaN`.
pub fn format_stress(stress: f64) -> Option<String> {
    if stress < 0.0 {
        return None;
    }
    if stress.is_nan() {
        Some("NaN".to_string())
    } else {
        Some(format!("{:.2}", (stress * 100.0).round() / 100.0))
    }
}

/// Format the elapsed counter (whole seconds) as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use vitals_core::formatting::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "00:00:00");
/// assert_eq!(format_elapsed(3661), "01:01:01");
/// ```
pub fn format_elapsed(counter: u64) -> String {
    let hours = counter / 3600;
    let minutes = (counter % 3600) / 60;
    let seconds = counter % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_heart_rate ─────────────────────────────────────────────────

    #[test]
    fn test_heart_rate_rounds_to_one_decimal() {
        assert_eq!(format_heart_rate(72.44), Some("72.4".to_string()));
        assert_eq!(format_heart_rate(72.45), Some("72.5".to_string()));
        assert_eq!(format_heart_rate(72.0), Some("72.0".to_string()));
    }

    #[test]
    fn test_heart_rate_negative_retained() {
        assert_eq!(format_heart_rate(-0.001), None);
        assert_eq!(format_heart_rate(-120.0), None);
    }

    #[test]
    fn test_heart_rate_nan_literal() {
        assert_eq!(format_heart_rate(f64::NAN), Some("NaN".to_string()));
    }

    #[test]
    fn test_heart_rate_zero() {
        assert_eq!(format_heart_rate(0.0), Some("0.0".to_string()));
    }

    // ── format_hrv ────────────────────────────────────────────────────────

    #[test]
    fn test_hrv_scales_to_milliseconds() {
        assert_eq!(format_hrv(0.0554), Some("55".to_string()));
        assert_eq!(format_hrv(0.0556), Some("56".to_string()));
        assert_eq!(format_hrv(0.1), Some("100".to_string()));
    }

    #[test]
    fn test_hrv_negative_retained() {
        assert_eq!(format_hrv(-0.05), None);
    }

    #[test]
    fn test_hrv_nan_literal() {
        assert_eq!(format_hrv(f64::NAN), Some("NaN".to_string()));
    }

    // ── format_stress ─────────────────────────────────────────────────────

    #[test]
    fn test_stress_rounds_to_two_decimals() {
        assert_eq!(format_stress(1.234), Some("1.23".to_string()));
        assert_eq!(format_stress(1.235), Some("1.24".to_string()));
        assert_eq!(format_stress(2.0), Some("2.00".to_string()));
    }

    #[test]
    fn test_stress_negative_retained() {
        assert_eq!(format_stress(-1.0), None);
    }

    #[test]
    fn test_stress_nan_literal() {
        assert_eq!(format_stress(f64::NAN), Some("NaN".to_string()));
    }

    // ── format_elapsed ────────────────────────────────────────────────────

    #[test]
    fn test_elapsed_zero() {
        assert_eq!(format_elapsed(0), "00:00:00");
    }

    #[test]
    fn test_elapsed_hours_minutes_seconds() {
        assert_eq!(format_elapsed(3661), "01:01:01");
    }

    #[test]
    fn test_elapsed_just_under_a_minute() {
        assert_eq!(format_elapsed(59), "00:00:59");
    }

    #[test]
    fn test_elapsed_large_counter() {
        // 100 hours stays two-digit-plus; the format never truncates hours.
        assert_eq!(format_elapsed(360_000), "100:00:00");
    }
}
