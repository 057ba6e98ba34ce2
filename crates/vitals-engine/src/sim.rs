//! Deterministic stand-ins for the closed-source estimation engine.
//!
//! [`SimulatedEngine`] replays the collaborator's observable behaviour (a
//! warm-up of `S3` ticks, a partial-window stretch of `S4`, then `S5` steady
//! state) with smooth synthetic readings, plus optional face-loss and
//! session-drop injection. [`ScriptedEngine`] replays an explicit estimate
//! sequence for tests that need exact control over every tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use vitals_core::models::{Estimate, StatusCode};
use vitals_core::{Result, VitalsError};

use crate::engine::{EngineConfig, VitalsEngine};

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Behaviour profile for the simulated engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Subject stays in frame; the session runs indefinitely.
    Clean,
    /// The subject periodically leaves the frame.
    FaceLoss,
    /// `start_monitoring` is rejected, as with a bad credential.
    ValidationFailure,
    /// The capture session drops after a while (`E2`), ending the session.
    SessionDrop,
}

impl Scenario {
    /// Parse the CLI scenario name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "clean" => Ok(Scenario::Clean),
            "face-loss" => Ok(Scenario::FaceLoss),
            "validation-failure" => Ok(Scenario::ValidationFailure),
            "session-drop" => Ok(Scenario::SessionDrop),
            other => Err(VitalsError::Config(format!("unknown scenario: {other}"))),
        }
    }
}

// ── SimulatedEngine ───────────────────────────────────────────────────────────

/// Tick counts controlling the face-loss scenario: within every cycle of
/// [`FACE_CYCLE`] polls, the last [`FACE_GAP`] report no subject.
const FACE_CYCLE: u64 = 40;
const FACE_GAP: u64 = 5;

/// Poll count after which the session-drop scenario kills the capture session.
const DROP_AFTER: u64 = 90;

/// A camera-free engine with the collaborator's polling contract.
pub struct SimulatedEngine {
    config: EngineConfig,
    scenario: Scenario,
    session_started: bool,
    monitoring: bool,
    /// Total polls since monitoring started.
    polls: u64,
    /// Polls during which a subject was in frame; frame accumulation stalls
    /// while the face is lost, exactly as the real engine behaves.
    frames: u64,
}

impl SimulatedEngine {
    pub fn new(config: EngineConfig, scenario: Scenario) -> Self {
        Self {
            config,
            scenario,
            session_started: false,
            monitoring: false,
            polls: 0,
            frames: 0,
        }
    }

    /// Ticks of warm-up before the engine produces any estimate.
    fn warmup_ticks(&self) -> u64 {
        (self.config.window_ticks() / 6).max(1)
    }

    /// Smooth synthetic readings derived from the frame counter.
    ///
    /// The stress waveform deliberately sweeps through every classification
    /// band so a demo exercises all banner colours.
    fn readings(&self) -> (f64, f64, f64) {
        let t = self.frames as f64;
        let heart_rate = 72.0 + 6.0 * (t / 9.0).sin();
        let hrv = 0.055 + 0.012 * (t / 13.0).sin();
        let stress = 2.2 + 1.6 * (t / 31.0).sin();
        (heart_rate, hrv, stress)
    }

    fn face_lost(&self) -> bool {
        self.scenario == Scenario::FaceLoss && self.polls % FACE_CYCLE >= FACE_CYCLE - FACE_GAP
    }
}

impl VitalsEngine for SimulatedEngine {
    fn start_session(&mut self) -> Result<()> {
        self.session_started = true;
        tracing::debug!("simulated camera session started");
        Ok(())
    }

    fn start_monitoring(&mut self) -> Result<()> {
        if !self.session_started {
            return Err(VitalsError::EngineNotRunning);
        }
        if self.scenario == Scenario::ValidationFailure {
            return Err(VitalsError::Validation(
                "credential rejected by the estimation service".into(),
            ));
        }
        self.monitoring = true;
        self.polls = 0;
        self.frames = 0;
        tracing::debug!(scenario = ?self.scenario, "simulated monitoring started");
        Ok(())
    }

    fn stop_monitoring(&mut self) {
        self.monitoring = false;
        tracing::debug!("simulated monitoring stopped");
    }

    fn get_estimates(&mut self) -> Estimate {
        if !self.monitoring {
            return Estimate::status_only(StatusCode::MonitoringNotActive);
        }

        self.polls += 1;

        if self.scenario == Scenario::SessionDrop && self.polls > DROP_AFTER {
            return Estimate::status_only(StatusCode::CameraSessionNotRunning);
        }

        if self.face_lost() {
            return Estimate::status_only(StatusCode::NoFaceDetected);
        }

        self.frames += 1;

        if self.frames < self.warmup_ticks() {
            return Estimate::status_only(StatusCode::NotEnoughFrames);
        }

        let (heart_rate, hrv, stress) = self.readings();
        let code = if self.frames < self.config.window_ticks() {
            StatusCode::PartialWindow
        } else {
            StatusCode::FullResults
        };
        Estimate::with_readings(code, heart_rate, hrv, stress)
    }
}

// ── ScriptedEngine ────────────────────────────────────────────────────────────

/// Replays a fixed estimate sequence; reports `S1-SDKIsNotMonitoring` when
/// the script is exhausted or monitoring is off.
pub struct ScriptedEngine {
    script: VecDeque<Estimate>,
    fail_validation: bool,
    session_started: bool,
    monitoring: bool,
    /// Count of `stop_monitoring` calls, observable from tests.
    pub stops: usize,
}

impl ScriptedEngine {
    pub fn new(script: impl IntoIterator<Item = Estimate>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fail_validation: false,
            session_started: false,
            monitoring: false,
            stops: 0,
        }
    }

    /// An engine whose `start_monitoring` always fails validation.
    pub fn rejecting_validation() -> Self {
        let mut engine = Self::new([]);
        engine.fail_validation = true;
        engine
    }
}

impl VitalsEngine for ScriptedEngine {
    fn start_session(&mut self) -> Result<()> {
        self.session_started = true;
        Ok(())
    }

    fn start_monitoring(&mut self) -> Result<()> {
        if self.fail_validation {
            return Err(VitalsError::Validation("scripted rejection".into()));
        }
        self.monitoring = true;
        Ok(())
    }

    fn stop_monitoring(&mut self) {
        self.monitoring = false;
        self.stops += 1;
    }

    fn get_estimates(&mut self) -> Estimate {
        if !self.monitoring {
            return Estimate::status_only(StatusCode::MonitoringNotActive);
        }
        self.script
            .pop_front()
            .unwrap_or_else(|| Estimate::status_only(StatusCode::MonitoringNotActive))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
