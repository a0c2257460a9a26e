//! run サブコマンド
//!
//! 設定を解決し、スイートを順番に実行して結果を表示します。

use crate::checks::CheckKind;
use crate::config::{self, Overrides};
use crate::context::ProbeContext;
use crate::logging::{self, LogSettings};
use crate::runner::Runner;
use crate::suite::Suite;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Every selected check passed
pub const EXIT_PASSED: i32 = 0;
/// At least one check failed or was skipped
pub const EXIT_FAILED: i32 = 1;
/// Configuration could not be resolved
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// run サブコマンドの引数
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Suite to run
    #[arg(short, long, value_enum, default_value_t = Suite::Full)]
    pub suite: Suite,

    /// Run only these checks (comma-separated ids, suite order is kept)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<CheckKind>,

    /// Backend base URL, including the /api prefix
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Pause between checks in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub json_report: Option<PathBuf>,

    /// Also write JSON logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,

    /// Bearer token for /admin endpoints
    #[arg(long)]
    pub admin_token: Option<String>,

    /// Resume file to upload instead of the built-in sample
    #[arg(long)]
    pub resume_file: Option<PathBuf>,
}

impl RunArgs {
    /// Flags that override file and environment configuration
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            pause_ms: self.pause_ms,
            admin_token: self.admin_token.clone(),
            resume_file: self.resume_file.clone(),
        }
    }
}

/// run コマンドを実行し、終了コードを返す
pub async fn execute(args: &RunArgs) -> Result<i32, anyhow::Error> {
    let settings = LogSettings {
        level: args
            .log_level
            .clone()
            .unwrap_or_else(config::log_level_from_env),
        file: args.log_file.clone(),
    };
    let _guard = match logging::init(&settings) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let config = match config::resolve(args.config.as_deref(), &args.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let checks = args.suite.select(&args.only);
    if checks.is_empty() {
        eprintln!(
            "Configuration error: none of the requested checks belong to suite '{}'",
            args.suite.id()
        );
        return Ok(EXIT_CONFIG_ERROR);
    }

    info!(
        suite = args.suite.id(),
        base_url = %config.base_url,
        checks = checks.len(),
        "Starting probe run"
    );

    let pause = config.pause();
    let mut ctx = ProbeContext::new(config)?;
    let mut runner = Runner::new(std::io::stdout(), pause);
    let report = runner.run(&mut ctx, args.suite, &checks).await?;

    let mut stdout = runner.into_inner();
    report.render(&mut stdout)?;

    if let Some(path) = &args.json_report {
        report.write_json(path)?;
        info!(path = %path.display(), "Report written");
    }

    Ok(if report.all_passed() {
        EXIT_PASSED
    } else {
        EXIT_FAILED
    })
}
