//! Sequential check driver
//!
//! One request in flight at a time. A failing check never stops the run;
//! it is recorded and the next check starts after the configured pause.

use crate::checks::CheckKind;
use crate::context::ProbeContext;
use crate::error::ProbeResult;
use crate::report::{CheckResult, Outcome, RunReport};
use crate::suite::Suite;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info_span, Instrument};

/// Runs checks in order and writes progress to `out`
pub struct Runner<W: Write> {
    out: W,
    pause: Duration,
}

impl<W: Write> Runner<W> {
    /// Runner writing to `out`, sleeping `pause` between checks
    pub fn new(out: W, pause: Duration) -> Self {
        Self { out, pause }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, suite: Suite, base_url: &str, count: usize) -> std::io::Result<()> {
        let rule = "=".repeat(80);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{}", suite.title())?;
        writeln!(self.out, "Base URL: {base_url}")?;
        writeln!(self.out, "Suite: {} ({count} checks)", suite.id())?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out)
    }

    /// Run `checks` against the backend in `ctx`
    pub async fn run(
        &mut self,
        ctx: &mut ProbeContext,
        suite: Suite,
        checks: &[CheckKind],
    ) -> ProbeResult<RunReport> {
        let mut report = RunReport::new(suite, ctx.client.base_url());
        self.banner(suite, ctx.client.base_url(), checks.len())?;

        for (index, check) in checks.iter().copied().enumerate() {
            if index > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }

            writeln!(self.out, "{}", check.banner())?;
            self.out.flush()?;

            let started = Instant::now();
            let outcome = check
                .run(ctx)
                .instrument(info_span!("check", id = check.id()))
                .await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            let (outcome, detail) = match outcome {
                Ok(detail) => (Outcome::Passed, detail),
                Err(err) if err.is_skip() => (Outcome::Skipped, err.to_string()),
                Err(err) => (Outcome::Failed, err.to_string()),
            };
            debug!(check = check.id(), ?outcome, elapsed_ms, "Check finished");

            let result = CheckResult {
                id: check,
                name: check.display_name().to_string(),
                outcome,
                detail,
                elapsed_ms,
            };
            result.render(&mut self.out)?;
            writeln!(self.out)?;
            report.results.push(result);
        }

        Ok(report)
    }
}
