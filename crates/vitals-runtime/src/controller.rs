//! The client-side session state machine around the engine's polling
//! contract.
//!
//! [`SessionController`] is deliberately free of timers and I/O: the driver
//! feeds it one estimate per tick and it produces a [`SessionSnapshot`] for
//! the presentation layer, which keeps every transition unit-testable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitals_core::display::ReadingSlots;
use vitals_core::models::{Estimate, StatusCode};

// ── SessionState ──────────────────────────────────────────────────────────────

/// Whether active measurement is in progress.
///
/// `Stopped --start--> Measuring`; `Measuring --stop or fatal--> Stopped`;
/// non-fatal ticks self-loop on `Measuring`. No other states exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Stopped,
    Measuring,
}

// ── Banners ───────────────────────────────────────────────────────────────────

/// Visibility of the informational banners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banners {
    /// "Searching for a face": no subject in frame.
    pub searching: bool,
    /// "Please wait": frames are accumulating but nothing is estimable yet.
    pub please_wait: bool,
    /// "Values may be noisy": the analysis window is not yet full.
    pub noisy: bool,
}

// ── SessionSnapshot ───────────────────────────────────────────────────────────

/// One rendering-ready view of the session, published after every transition.
///
/// This is the primary data contract between the runtime and the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// Whole seconds of measurement, rendered as `HH:MM:SS`.
    pub elapsed_secs: u64,
    pub slots: ReadingSlots,
    pub banners: Banners,
    /// When the current measuring session began.
    pub started_at: Option<DateTime<Utc>>,
    /// A blocking validation error; set once, cleared on the next start.
    pub error: Option<String>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            state: SessionState::Stopped,
            elapsed_secs: 0,
            slots: ReadingSlots::default(),
            banners: Banners::default(),
            started_at: None,
            error: None,
        }
    }
}

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What the driver must do after a tick is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep polling.
    Continue,
    /// A fatal status forced the session to stop; halt the engine too.
    FatalStop,
}

// ── SessionController ─────────────────────────────────────────────────────────

/// Owns the session state, the elapsed counter, and the reading slots.
#[derive(Debug)]
pub struct SessionController {
    state: SessionState,
    elapsed_secs: u64,
    slots: ReadingSlots,
    banners: Banners,
    started_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            state: SessionState::Stopped,
            elapsed_secs: 0,
            slots: ReadingSlots::default(),
            banners: Banners::default(),
            started_at: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    // ── Intents ───────────────────────────────────────────────────────────

    /// Enter the measuring state.
    ///
    /// Resets the elapsed counter and clears every slot to the placeholder,
    /// so nothing from a previous session survives into the first tick. Only
    /// called after the engine accepted `start_monitoring`.
    pub fn begin(&mut self) {
        self.state = SessionState::Measuring;
        self.elapsed_secs = 0;
        self.slots.clear();
        // Measuring mode starts with the warm-up banners showing; the first
        // tick then settles them to whatever the engine reports.
        self.banners = Banners {
            searching: false,
            please_wait: true,
            noisy: true,
        };
        self.started_at = Some(Utc::now());
        self.last_error = None;
        tracing::info!("measurement session started");
    }

    /// Record a rejected start. The session stays stopped and the error is
    /// surfaced exactly once; there is no automatic retry.
    pub fn fail_validation(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "monitoring request rejected");
        self.last_error = Some(message);
        self.halt_internal();
    }

    /// Leave the measuring state and reset the elapsed counter.
    pub fn halt(&mut self) {
        if self.state() == SessionState::Measuring {
            tracing::info!(elapsed_secs = self.elapsed_secs, "measurement session stopped");
        }
        self.halt_internal();
    }

    fn halt_internal(&mut self) {
        self.state = SessionState::Stopped;
        self.elapsed_secs = 0;
        self.banners = Banners::default();
        self.started_at = None;
    }

    // ── Tick dispatch ─────────────────────────────────────────────────────

    /// Dispatch one polled estimate. Called once per second while measuring.
    pub fn on_tick(&mut self, estimate: &Estimate) -> TickOutcome {
        if self.state() != SessionState::Measuring {
            return TickOutcome::Continue;
        }

        match estimate.code {
            StatusCode::MonitoringNotActive
            | StatusCode::ValidationRejected
            | StatusCode::CameraSessionNotRunning => {
                // Silent force-stop: the session is unrecoverable but this is
                // not a user-facing error.
                tracing::warn!(code = %estimate.code, "fatal status; forcing stop");
                self.halt();
                TickOutcome::FatalStop
            }
            StatusCode::NoFaceDetected => {
                self.elapsed_secs = 0;
                self.slots.clear();
                self.banners = Banners {
                    searching: true,
                    please_wait: false,
                    noisy: false,
                };
                TickOutcome::Continue
            }
            StatusCode::NotEnoughFrames => {
                self.elapsed_secs += 1;
                self.slots.clear();
                self.banners = Banners {
                    searching: false,
                    please_wait: true,
                    noisy: true,
                };
                TickOutcome::Continue
            }
            StatusCode::PartialWindow => {
                self.elapsed_secs += 1;
                self.slots.apply(estimate);
                self.banners = Banners {
                    searching: false,
                    please_wait: false,
                    noisy: true,
                };
                TickOutcome::Continue
            }
            StatusCode::FullResults => {
                self.elapsed_secs += 1;
                self.slots.apply(estimate);
                self.banners = Banners::default();
                TickOutcome::Continue
            }
        }
    }

    /// Produce a rendering-ready snapshot of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state(),
            elapsed_secs: self.elapsed_secs,
            slots: self.slots.clone(),
            banners: self.banners,
            started_at: self.started_at,
            error: self.last_error.clone(),
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
