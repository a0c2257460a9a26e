//! list サブコマンド
//!
//! スイートと実行されるチェックの一覧を表示します。

use crate::suite::Suite;
use clap::{Args, ValueEnum};
use std::io::Write;

/// list サブコマンドの引数
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ListArgs {
    /// Show only this suite
    #[arg(short, long, value_enum)]
    pub suite: Option<Suite>,
}

/// 一覧を書き出す
pub fn render<W: Write>(args: &ListArgs, out: &mut W) -> std::io::Result<()> {
    let suites: Vec<Suite> = match args.suite {
        Some(suite) => vec![suite],
        None => Suite::value_variants().to_vec(),
    };

    for suite in suites {
        let checks = suite.checks();
        writeln!(out, "{} - {} ({} checks)", suite.id(), suite.title(), checks.len())?;
        for check in checks {
            let hint = if check.is_ai_backed() { "  [AI]" } else { "" };
            writeln!(out, "  {:<22}{}{}", check.id(), check.display_name(), hint)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// list コマンドを実行
pub fn execute(args: &ListArgs) -> Result<(), anyhow::Error> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(args, &mut out)?;
    Ok(())
}
