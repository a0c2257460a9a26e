//! CareerGPT backend probe
//!
//! Black-box HTTP checks against a running CareerGPT API. Checks run one at
//! a time, record PASS/FAIL/SKIP, and roll up into a summary whose overall
//! result drives the process exit code.

#![warn(missing_docs)]

/// Per-endpoint checks
pub mod checks;

/// Command-line interface
pub mod cli;

/// HTTP client wrapper
pub mod client;

/// Configuration resolution (file, environment, flags)
pub mod config;

/// Values captured between checks
pub mod context;

/// Error types
pub mod error;

/// Logging setup
pub mod logging;

/// Run results and summary
pub mod report;

/// Sequential driver
pub mod runner;

/// JSON shape assertions
pub mod shape;

/// Check suites
pub mod suite;
