//! Session runtime for the vitals monitor.
//!
//! [`controller`] holds the pure session state machine; [`driver`] runs it on
//! a 1-second polling cadence in a tokio task and exchanges commands and
//! snapshots with the UI over `mpsc` channels.

pub mod controller;
pub mod driver;

pub use controller::{Banners, SessionController, SessionSnapshot, SessionState, TickOutcome};
pub use driver::{DriverHandle, SessionCommand, SessionDriver};
