//! Async session driver.
//!
//! Runs the [`SessionController`] in a tokio task against a [`VitalsEngine`],
//! polling once per interval while measuring and forwarding a
//! [`SessionSnapshot`] through an `mpsc` channel after every transition, so
//! the TUI event loop consumes state without any shared mutability.
//!
//! Cancellation is by channel closure or [`DriverHandle::abort`]; an
//! in-flight tick completes, but no further tick fires afterwards.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use vitals_engine::VitalsEngine;

use crate::controller::{SessionController, SessionSnapshot, SessionState, TickOutcome};

// ── SessionCommand ────────────────────────────────────────────────────────────

/// User intents forwarded from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Begin a measurement session.
    Start,
    /// End the current measurement session.
    Stop,
}

// ── SessionDriver ─────────────────────────────────────────────────────────────

/// Owns the engine and the polling cadence.
///
/// Call [`SessionDriver::start`] to spin up the loop in a dedicated tokio
/// task and receive the channel endpoints the UI talks through.
pub struct SessionDriver {
    engine: Box<dyn VitalsEngine>,
    poll_interval: Duration,
}

impl SessionDriver {
    /// Create a driver polling `engine` every `poll_interval`.
    ///
    /// The contract interval is one second; tests pass shorter intervals.
    pub fn new(engine: Box<dyn VitalsEngine>, poll_interval: Duration) -> Self {
        Self {
            engine,
            poll_interval,
        }
    }

    /// Start the session loop.
    ///
    /// Returns:
    /// - A `mpsc::Sender<SessionCommand>` for start/stop intents.
    /// - A `mpsc::Receiver<SessionSnapshot>` for the caller to poll.
    /// - A [`DriverHandle`] that can abort the loop.
    pub fn start(
        self,
    ) -> (
        mpsc::Sender<SessionCommand>,
        mpsc::Receiver<SessionSnapshot>,
        DriverHandle,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        // Buffer a modest number of snapshots so a slow consumer doesn't
        // stall the loop.
        let (snap_tx, snap_rx) = mpsc::channel(16);

        let handle = tokio::spawn(async move {
            self.run(cmd_rx, snap_tx).await;
        });

        (cmd_tx, snap_rx, DriverHandle { handle })
    }

    // ── Private implementation ────────────────────────────────────────────

    /// The main session loop.
    ///
    /// The loop exits when the command sender or the snapshot receiver is
    /// dropped; the engine is halted on the way out.
    async fn run(
        mut self,
        mut cmd_rx: mpsc::Receiver<SessionCommand>,
        snap_tx: mpsc::Sender<SessionSnapshot>,
    ) {
        let mut controller = SessionController::new();

        // Bring up the engine's camera session once, before any monitoring.
        if let Err(e) = self.engine.start_session() {
            tracing::warn!(error = %e, "engine session failed to start");
        }

        // Initial snapshot so the UI renders the stopped screen immediately.
        send_snapshot(&snap_tx, &controller).await;

        let mut interval = time::interval(self.poll_interval);
        // Consume the first tick which fires immediately.
        interval.tick().await;

        loop {
            if snap_tx.is_closed() {
                tracing::debug!("snapshot channel closed; exiting session loop");
                break;
            }

            tokio::select! {
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(SessionCommand::Start) => {
                            self.handle_start(&mut controller);
                            // Align the first tick with the fresh counter.
                            interval.reset();
                            send_snapshot(&snap_tx, &controller).await;
                        }
                        Some(SessionCommand::Stop) => {
                            self.handle_stop(&mut controller);
                            send_snapshot(&snap_tx, &controller).await;
                        }
                        None => {
                            tracing::debug!("command channel closed; exiting session loop");
                            break;
                        }
                    }
                }
                _ = interval.tick() => {
                    if controller.state() != SessionState::Measuring {
                        continue;
                    }
                    let estimate = self.engine.get_estimates();
                    if controller.on_tick(&estimate) == TickOutcome::FatalStop {
                        self.engine.stop_monitoring();
                    }
                    send_snapshot(&snap_tx, &controller).await;
                }
            }
        }

        // Leave the engine halted whichever way the loop ended.
        self.engine.stop_monitoring();
    }

    /// Start intent: ask the engine to monitor; enter Measuring only when it
    /// accepts. A validation rejection is surfaced once as a blocking error.
    fn handle_start(&mut self, controller: &mut SessionController) {
        if controller.state() == SessionState::Measuring {
            return;
        }
        match self.engine.start_monitoring() {
            Ok(()) => controller.begin(),
            Err(e) => controller.fail_validation(e.to_string()),
        }
    }

    /// Stop intent: halt the engine and reset the session.
    fn handle_stop(&mut self, controller: &mut SessionController) {
        if controller.state() == SessionState::Measuring {
            self.engine.stop_monitoring();
        }
        controller.halt();
    }
}

/// Send the controller's current snapshot, logging if the receiver is gone.
async fn send_snapshot(tx: &mpsc::Sender<SessionSnapshot>, controller: &SessionController) {
    if let Err(e) = tx.send(controller.snapshot()).await {
        tracing::warn!(error = %e, "failed to send session snapshot; receiver dropped");
    }
}

// ── DriverHandle ──────────────────────────────────────────────────────────────

/// A handle to the background session task.
///
/// Drop the channels or call [`DriverHandle::abort`] to stop the loop.
pub struct DriverHandle {
    handle: tokio::task::JoinHandle<()>,
}

impl DriverHandle {
    /// Immediately abort the session loop.
    ///
    /// Aborting can cancel the task before its end-of-loop engine halt runs;
    /// for a clean shutdown close the command channel and [`join`] instead.
    ///
    /// [`join`]: DriverHandle::join
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for the session loop to finish.
    ///
    /// The loop ends once the command sender or the snapshot receiver is
    /// dropped, and it halts the engine on the way out, so joining guarantees
    /// the engine is stopped.
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
