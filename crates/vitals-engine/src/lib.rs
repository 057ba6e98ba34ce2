//! Engine boundary for the vitals monitor.
//!
//! The real vitals-estimation engine is an external, closed-source
//! collaborator; this crate defines the lifecycle contract the monitor
//! consumes ([`VitalsEngine`]) and ships a deterministic simulated engine so
//! the binary, demos, and tests run without a camera or SDK credential.

pub mod engine;
pub mod sim;

pub use engine::{EngineConfig, VitalsEngine};
pub use sim::{Scenario, ScriptedEngine, SimulatedEngine};
