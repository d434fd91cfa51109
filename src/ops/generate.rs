//! Build the HAL registry from a list of instance names.
//!
//! Each line is filtered, parsed and merged into the registry. Lines that
//! cannot be used are logged and recorded in the report; they never stop the
//! run. Merge conflicts between entries of the same name are not recoverable
//! and panic.

use thiserror::Error;

use crate::core::{HalEntry, HalRegistry};
use crate::fqname::{parse_fqname, ParseError};
use crate::ops::filter::{LineFilter, LineKind};
use crate::ops::format::{format_registry, FormatOptions};

/// Why an input line was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("skipping file name (not a FQN)")]
    FileName,

    #[error("skipping line that doesn't look like a FQN")]
    NotFqName,

    #[error("skipping invalid FQN: {0}")]
    Malformed(#[from] ParseError),
}

/// One input line that was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_number: usize,
    /// Trimmed line text
    pub text: String,
    pub reason: SkipReason,
}

/// Result of processing a list of lines.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Merged entries
    pub registry: HalRegistry,
    /// Lines that were skipped with a warning, in input order
    pub skipped: Vec<SkippedLine>,
}

impl GenerateReport {
    /// Lines that passed the filter but failed to parse.
    pub fn malformed(&self) -> impl Iterator<Item = &SkippedLine> {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::Malformed(_)))
    }

    /// Whether any line failed to parse.
    pub fn has_malformed(&self) -> bool {
        self.malformed().next().is_some()
    }
}

/// Filter, parse and merge every line into a fresh registry.
///
/// # Panics
///
/// Panics if two lines name the same package in different HAL formats.
pub fn build_registry<I, S>(lines: I, filter: &LineFilter) -> GenerateReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = GenerateReport::default();

    for (index, raw) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let raw = raw.as_ref();

        let result = match filter.classify(raw) {
            LineKind::Ignored => continue,
            LineKind::Skipped(reason) => Err(reason),
            LineKind::Candidate(line) => parse_fqname(line)
                .map(HalEntry::from_fqname)
                .map_err(SkipReason::from),
        };

        match result {
            Ok(entry) => report.registry.upsert(entry),
            Err(reason) => {
                let text = raw.trim().to_string();
                tracing::warn!("line {}: {}: {}", line_number, reason, text);
                report.skipped.push(SkippedLine {
                    line_number,
                    text,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        "Merged {} entries, skipped {} lines",
        report.registry.len(),
        report.skipped.len()
    );

    report
}

/// Run the whole pipeline with default settings and return the XML text.
pub fn generate_manifest<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let report = build_registry(lines, &LineFilter::default());
    format_registry(&report.registry, &FormatOptions::default())
}
