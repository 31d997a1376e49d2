//! Default command: sum the extrapolated values of every input line.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::cli::RunArgs;
use crate::config::Settings;
use crate::summary::{Summary, summarize_file};

/// Process the input file and print the totals.
///
/// Rejected lines are reported on stderr and do not stop the run. A failure to
/// read the input is returned before anything is printed on stdout.
pub fn run(args: &RunArgs, settings: &Settings) -> anyhow::Result<Summary> {
    let input = args.input.as_deref().unwrap_or(settings.input.path.as_path());
    tracing::debug!("[run] input: {}", input.display());

    let summary = summarize_file(input, args.backward)
        .with_context(|| format!("failed to process {}", input.display()))?;

    report(
        &summary,
        input,
        std::io::stdout().lock(),
        std::io::stderr().lock(),
    )
    .context("failed to write results")?;

    Ok(summary)
}

fn report(
    summary: &Summary,
    input: &Path,
    mut out: impl Write,
    mut err: impl Write,
) -> std::io::Result<()> {
    if summary.has_rejections() {
        for rejected in &summary.rejected {
            writeln!(
                err,
                "{}: line {}: {}",
                input.display(),
                rejected.line,
                rejected.error
            )?;
        }
        writeln!(
            err,
            "{}: skipped {} of {} lines",
            input.display(),
            summary.rejected.len(),
            summary.rejected.len() + summary.accepted
        )?;
    }

    writeln!(out, "Sum Part 1: {}", summary.forward)?;
    if let Some(backward) = summary.backward {
        writeln!(out, "Sum Part 2: {backward}")?;
    }
    Ok(())
}
