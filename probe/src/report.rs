//! Run results and the console summary

use crate::checks::CheckKind;
use crate::error::ProbeResult;
use crate::suite::Suite;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const RULE_WIDTH: usize = 80;

/// Outcome of one check
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Assertions held
    Passed,
    /// Transport error, bad status or bad shape
    Failed,
    /// Not attempted because an earlier capture is missing
    Skipped,
}

impl Outcome {
    /// Console label
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "✅ PASS",
            Self::Failed => "❌ FAIL",
            Self::Skipped => "⏭️  SKIP",
        }
    }
}

/// Result of one check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Check id
    pub id: CheckKind,
    /// Display name
    pub name: String,
    /// Outcome
    pub outcome: Outcome,
    /// Pass detail or failure reason
    pub detail: String,
    /// Wall time spent in the check
    pub elapsed_ms: u64,
}

impl CheckResult {
    /// Whether the check passed
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    /// Write the `STATUS - name` line and the indented detail
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{} - {}", self.outcome.label(), self.name)?;
        if !self.detail.is_empty() {
            writeln!(out, "    {}", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered results of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Suite that was run
    pub suite: Suite,
    /// Backend base URL
    pub base_url: String,
    /// Run start (UTC)
    pub started_at: DateTime<Utc>,
    /// Results in execution order
    pub results: Vec<CheckResult>,
}

impl RunReport {
    /// Empty report starting now
    pub fn new(suite: Suite, base_url: impl Into<String>) -> Self {
        Self {
            suite,
            base_url: base_url.into(),
            started_at: Utc::now(),
            results: Vec::new(),
        }
    }

    /// Number of passed checks
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Number of checks run (skips included)
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Pass percentage; 0.0 for an empty run
    pub fn pass_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.passed() as f64 / self.total() as f64 * 100.0
    }

    /// Names of checks that did not pass, in order
    pub fn failed_names(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.passed())
            .map(|r| r.name.as_str())
            .collect()
    }

    /// True only when at least one check ran and every check passed
    pub fn all_passed(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(CheckResult::passed)
    }

    /// Print the summary block
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "TEST RESULTS SUMMARY")?;
        writeln!(out, "{rule}")?;
        for result in &self.results {
            result.render(out)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Overall: {}/{} checks passed ({:.1}%)",
            self.passed(),
            self.total(),
            self.pass_rate()
        )?;
        if self.all_passed() {
            writeln!(out, "🎉 ALL CHECKS PASSED! CareerGPT backend is fully functional.")?;
        } else {
            writeln!(out, "⚠️  FAILED CHECKS: {}", self.failed_names().join(", "))?;
        }
        Ok(())
    }

    /// Write the report as pretty JSON
    pub fn write_json(&self, path: &Path) -> ProbeResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(careergpt_probe_common::error::CommonError::from)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
