//! Line-oriented intake driver.
//!
//! Reads one JSON submission per line, runs it through the engine and writes
//! one JSON outcome per line. Blank lines are ignored; lines that do not parse
//! are logged and skipped without producing output.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::warn;

use vanity_products::{IntakeEngine, ProductStore, Submission};

/// Counts of what happened to each input line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub skipped: usize,
}

pub fn run<S, R, W>(
    engine: &IntakeEngine,
    store: &S,
    input: R,
    mut output: W,
) -> anyhow::Result<RunSummary>
where
    S: ProductStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let submission: Submission = match serde_json::from_str(&line) {
            Ok(s) => s,
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping malformed submission");
                summary.skipped += 1;
                continue;
            }
        };

        let outcome = engine
            .submit(&submission, store)
            .with_context(|| format!("intake failed on line {line_no}"))?;

        if outcome.is_success() {
            summary.accepted += 1;
        } else {
            summary.rejected += 1;
        }

        serde_json::to_writer(&mut output, &outcome).context("failed to write outcome")?;
        writeln!(output).context("failed to write outcome")?;
    }

    output.flush().context("failed to flush output")?;
    Ok(summary)
}
