//! CLI module for careergpt-probe
//!
//! `run` executes a suite against a live backend; `list` shows what a suite
//! would run. Without a subcommand the full suite runs with defaults.

pub mod list;
pub mod run;

use clap::{Parser, Subcommand};

/// CareerGPT backend probe - sequential HTTP checks against a running API
#[derive(Parser, Debug)]
#[command(name = "careergpt-probe")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CAREERGPT_BASE_URL          Backend base URL (default: http://localhost:3000/api)
    CAREERGPT_TIMEOUT_SECS      Per-request timeout in seconds (default: 60)
    CAREERGPT_PAUSE_MS          Pause between checks in milliseconds (default: 1000)
    CAREERGPT_ADMIN_TOKEN       Bearer token for /admin endpoints
    CAREERGPT_ACCOUNT_EMAIL     Email for the probe account (default: generated)
    CAREERGPT_ACCOUNT_PASSWORD  Password for the probe account
    CAREERGPT_LOG_LEVEL         Log level (default: info, overridden by RUST_LOG)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a check suite against the backend
    Run(run::RunArgs),
    /// List suites and their checks
    List(list::ListArgs),
}
