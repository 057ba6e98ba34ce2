use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VitalsError;

// ── StatusCode ────────────────────────────────────────────────────────────────

/// Status code attached to every estimate the engine produces.
///
/// The engine's observed contract is string-valued; the enumeration is closed
/// and matched exhaustively so a new engine code fails to compile instead of
/// silently falling through a string-equality chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    /// Monitoring was never started or has already been torn down.
    #[serde(rename = "S1-SDKIsNotMonitoring")]
    MonitoringNotActive,
    /// The engine rejected its credential (or has no connectivity to check it).
    #[serde(rename = "E1-SDKValidationRejected")]
    ValidationRejected,
    /// The camera capture session backing the engine stopped running.
    #[serde(rename = "E2-CameraSessionNotRunning")]
    CameraSessionNotRunning,
    /// No subject is visible in the camera frame.
    #[serde(rename = "S2-NoFaceDetected")]
    NoFaceDetected,
    /// Frames are flowing but too few have accumulated to estimate anything.
    #[serde(rename = "S3-NotEnoughFramesProcessed")]
    NotEnoughFrames,
    /// Estimates are available but the analysis window is not yet full.
    #[serde(rename = "S4-NotFullWindow")]
    PartialWindow,
    /// Stable estimates over a full analysis window.
    #[serde(rename = "S5-FullResults")]
    FullResults,
}

impl StatusCode {
    /// The exact wire string used by the engine contract.
    pub fn as_wire(&self) -> &'static str {
        match self {
            StatusCode::MonitoringNotActive => "S1-SDKIsNotMonitoring",
            StatusCode::ValidationRejected => "E1-SDKValidationRejected",
            StatusCode::CameraSessionNotRunning => "E2-CameraSessionNotRunning",
            StatusCode::NoFaceDetected => "S2-NoFaceDetected",
            StatusCode::NotEnoughFrames => "S3-NotEnoughFramesProcessed",
            StatusCode::PartialWindow => "S4-NotFullWindow",
            StatusCode::FullResults => "S5-FullResults",
        }
    }

    /// Whether this code means the session is unrecoverable and must be
    /// force-stopped.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StatusCode::MonitoringNotActive
                | StatusCode::ValidationRejected
                | StatusCode::CameraSessionNotRunning
        )
    }

    /// Whether frames are being processed under this code.
    ///
    /// The elapsed counter only advances for codes in this family.
    pub fn processes_frames(&self) -> bool {
        matches!(
            self,
            StatusCode::NotEnoughFrames | StatusCode::PartialWindow | StatusCode::FullResults
        )
    }

    /// Whether the estimate carries publishable readings under this code.
    pub fn has_readings(&self) -> bool {
        matches!(self, StatusCode::PartialWindow | StatusCode::FullResults)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for StatusCode {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S1-SDKIsNotMonitoring" => Ok(StatusCode::MonitoringNotActive),
            "E1-SDKValidationRejected" => Ok(StatusCode::ValidationRejected),
            "E2-CameraSessionNotRunning" => Ok(StatusCode::CameraSessionNotRunning),
            "S2-NoFaceDetected" => Ok(StatusCode::NoFaceDetected),
            "S3-NotEnoughFramesProcessed" => Ok(StatusCode::NotEnoughFrames),
            "S4-NotFullWindow" => Ok(StatusCode::PartialWindow),
            "S5-FullResults" => Ok(StatusCode::FullResults),
            other => Err(VitalsError::UnknownStatusCode(other.to_string())),
        }
    }
}

// ── Estimate ──────────────────────────────────────────────────────────────────

/// One polling cycle's output from the vitals-estimation engine.
///
/// Readings use `f64::NAN` as the "undetermined" sentinel, matching the engine
/// contract. On the wire the engine emits `null` for undetermined readings,
/// so the fields go through [`nan_as_null`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    /// Status code for this cycle.
    #[serde(rename = "CODE")]
    pub code: StatusCode,
    /// Heart rate in beats per minute.
    #[serde(rename = "HEARTRATE", default = "nan", with = "nan_as_null")]
    pub heart_rate: f64,
    /// Heart-rate variability in seconds (displayed as milliseconds).
    #[serde(rename = "HRV", default = "nan", with = "nan_as_null")]
    pub hrv: f64,
    /// Stress score on the engine's 0–5 scale.
    #[serde(rename = "STRESS", default = "nan", with = "nan_as_null")]
    pub stress: f64,
}

impl Estimate {
    /// An estimate that carries only a status code; all readings undetermined.
    pub fn status_only(code: StatusCode) -> Self {
        Self {
            code,
            heart_rate: f64::NAN,
            hrv: f64::NAN,
            stress: f64::NAN,
        }
    }

    /// An estimate with publishable readings.
    pub fn with_readings(code: StatusCode, heart_rate: f64, hrv: f64, stress: f64) -> Self {
        Self {
            code,
            heart_rate,
            hrv,
            stress,
        }
    }
}

fn nan() -> f64 {
    f64::NAN
}

/// Serde adapter mapping non-finite readings to JSON `null` and back.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── StatusCode families ───────────────────────────────────────────────

    #[test]
    fn test_fatal_family() {
        assert!(StatusCode::MonitoringNotActive.is_fatal());
        assert!(StatusCode::ValidationRejected.is_fatal());
        assert!(StatusCode::CameraSessionNotRunning.is_fatal());
        assert!(!StatusCode::NoFaceDetected.is_fatal());
        assert!(!StatusCode::NotEnoughFrames.is_fatal());
        assert!(!StatusCode::PartialWindow.is_fatal());
        assert!(!StatusCode::FullResults.is_fatal());
    }

    #[test]
    fn test_frame_processing_family() {
        assert!(StatusCode::NotEnoughFrames.processes_frames());
        assert!(StatusCode::PartialWindow.processes_frames());
        assert!(StatusCode::FullResults.processes_frames());
        assert!(!StatusCode::NoFaceDetected.processes_frames());
        assert!(!StatusCode::MonitoringNotActive.processes_frames());
    }

    #[test]
    fn test_has_readings() {
        assert!(StatusCode::PartialWindow.has_readings());
        assert!(StatusCode::FullResults.has_readings());
        assert!(!StatusCode::NotEnoughFrames.has_readings());
        assert!(!StatusCode::NoFaceDetected.has_readings());
    }

    // ── Wire strings ──────────────────────────────────────────────────────

    #[test]
    fn test_wire_round_trip_all_codes() {
        let codes = [
            StatusCode::MonitoringNotActive,
            StatusCode::ValidationRejected,
            StatusCode::CameraSessionNotRunning,
            StatusCode::NoFaceDetected,
            StatusCode::NotEnoughFrames,
            StatusCode::PartialWindow,
            StatusCode::FullResults,
        ];
        for code in codes {
            let parsed: StatusCode = code.as_wire().parse().unwrap();
            assert_eq!(parsed, code);
        }
    }

    #[test]
    fn test_unknown_wire_string_rejected() {
        let err = "S9-SomethingNew".parse::<StatusCode>().unwrap_err();
        assert!(err.to_string().contains("S9-SomethingNew"));
    }

    #[test]
    fn test_display_matches_wire() {
        assert_eq!(
            StatusCode::NoFaceDetected.to_string(),
            "S2-NoFaceDetected"
        );
    }

    // ── Estimate serde ────────────────────────────────────────────────────

    #[test]
    fn test_estimate_deserialize_full() {
        let json = r#"{"CODE":"S5-FullResults","HEARTRATE":72.4,"HRV":0.055,"STRESS":1.8}"#;
        let est: Estimate = serde_json::from_str(json).unwrap();
        assert_eq!(est.code, StatusCode::FullResults);
        assert!((est.heart_rate - 72.4).abs() < 1e-9);
        assert!((est.hrv - 0.055).abs() < 1e-9);
        assert!((est.stress - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_deserialize_null_readings_become_nan() {
        let json = r#"{"CODE":"S2-NoFaceDetected","HEARTRATE":null,"HRV":null,"STRESS":null}"#;
        let est: Estimate = serde_json::from_str(json).unwrap();
        assert!(est.heart_rate.is_nan());
        assert!(est.hrv.is_nan());
        assert!(est.stress.is_nan());
    }

    #[test]
    fn test_estimate_serialize_nan_as_null() {
        let est = Estimate::status_only(StatusCode::NotEnoughFrames);
        let json = serde_json::to_string(&est).unwrap();
        assert!(json.contains(r#""HEARTRATE":null"#), "got {json}");
        assert!(json.contains(r#""CODE":"S3-NotEnoughFramesProcessed""#));
    }

    #[test]
    fn test_estimate_status_only_all_nan() {
        let est = Estimate::status_only(StatusCode::NoFaceDetected);
        assert!(est.heart_rate.is_nan());
        assert!(est.hrv.is_nan());
        assert!(est.stress.is_nan());
    }
}
