//! The vitals-estimation engine contract.
//!
//! The monitor consumes, and does not define, this lifecycle: configure,
//! start the camera session, start monitoring (which may fail validation),
//! poll estimates, stop monitoring. Everything behind the trait (face
//! detection, PPG extraction, the HR/HRV/stress estimators, camera capture)
//! belongs to the external collaborator.

use serde::{Deserialize, Serialize};

use vitals_core::models::Estimate;
use vitals_core::{Result, VitalsError};

// ── VitalsEngine ──────────────────────────────────────────────────────────────

/// Lifecycle contract of the vitals-estimation engine.
///
/// The session driver owns its engine exclusively, including the camera
/// session the engine manages internally; no other component touches it.
pub trait VitalsEngine: Send {
    /// Start the engine's internal camera session. Called once at startup,
    /// before any monitoring begins.
    fn start_session(&mut self) -> Result<()>;

    /// Begin producing estimates.
    ///
    /// Fails with [`VitalsError::Validation`] when the engine cannot be
    /// trusted to produce results (bad credential, no connectivity). The
    /// caller must not enter the measuring state in that case.
    fn start_monitoring(&mut self) -> Result<()>;

    /// Stop producing estimates. Safe to call when not monitoring.
    fn stop_monitoring(&mut self);

    /// Fetch the latest estimate.
    ///
    /// Never blocks; when the engine is not monitoring it reports the
    /// `S1-SDKIsNotMonitoring` status rather than an error.
    fn get_estimates(&mut self) -> Estimate;
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Length of a valid engine credential in the observed contract.
pub const CREDENTIAL_LEN: usize = 20;

/// Validated construction parameters for an engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine credential string (exactly [`CREDENTIAL_LEN`] characters).
    pub credential: String,
    /// Camera frame rate the engine analyses at.
    pub frame_rate: u32,
    /// Estimation window in seconds; `S5-FullResults` requires a full window.
    pub window_secs: f64,
    /// Engine-internal estimate refresh interval in seconds.
    pub update_every_secs: f64,
}

impl EngineConfig {
    /// Build a validated configuration.
    pub fn new(
        credential: impl Into<String>,
        frame_rate: u32,
        window_secs: f64,
        update_every_secs: f64,
    ) -> Result<Self> {
        let credential = credential.into();
        if credential.chars().count() != CREDENTIAL_LEN {
            return Err(VitalsError::Config(format!(
                "credential must be exactly {CREDENTIAL_LEN} characters, got {}",
                credential.chars().count()
            )));
        }
        if frame_rate == 0 {
            return Err(VitalsError::Config("frame rate must be positive".into()));
        }
        if !(window_secs > 0.0) {
            return Err(VitalsError::Config(
                "estimation window must be positive".into(),
            ));
        }
        if !(update_every_secs > 0.0) || update_every_secs > window_secs {
            return Err(VitalsError::Config(
                "update interval must be positive and no longer than the window".into(),
            ));
        }
        Ok(Self {
            credential,
            frame_rate,
            window_secs,
            update_every_secs,
        })
    }

    /// Number of estimate ticks needed to fill the estimation window.
    pub fn window_ticks(&self) -> u64 {
        (self.window_secs / self.update_every_secs).ceil() as u64
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
