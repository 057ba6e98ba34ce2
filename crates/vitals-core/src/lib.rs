//! Core domain types for the vitals monitor.
//!
//! Holds the status-code enumeration and estimate record consumed from the
//! vitals-estimation engine, the stress classification, the exact display
//! formatting rules, reading slots, CLI settings, and the shared error type.

pub mod classify;
pub mod display;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, VitalsError};
