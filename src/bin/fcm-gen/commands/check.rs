//! `fcm-gen check` command
//!
//! Runs the pipeline without printing entries and reports every skipped line.

use std::io::IsTerminal;

use anyhow::{bail, Result};

use super::{load_config, read_lines};
use crate::cli::CheckArgs;
use fcm_gen::ops::{build_registry, LineFilter};
use fcm_gen::util::diagnostic::{emit, Diagnostic};

pub fn execute(args: CheckArgs, color: bool) -> Result<()> {
    let config = load_config(&args.input)?;
    let color = color && std::io::stderr().is_terminal();

    let path = &args.input.input;
    let lines = read_lines(path)?;
    let report = build_registry(&lines, &LineFilter::from_config(&config.filter));

    let source = path.display().to_string();
    for skipped in &report.skipped {
        emit(&Diagnostic::for_skipped_line(&source, skipped), color);
    }

    let malformed = report.malformed().count();
    let summary = format!(
        "{} entries, {} skipped line(s), {} invalid",
        report.registry.len(),
        report.skipped.len(),
        malformed
    );
    let summary = if malformed > 0 {
        Diagnostic::error(summary)
    } else {
        Diagnostic::note(summary)
    };
    emit(&summary, color);

    if malformed > 0 {
        bail!("{} invalid instance name(s) in {}", malformed, source);
    }

    Ok(())
}
