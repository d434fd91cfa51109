//! Coarse filtering of raw input lines.
//!
//! The filter only decides whether a line is worth handing to the parser.
//! It is a heuristic: lines it lets through can still fail to parse.

use crate::ops::generate::SkipReason;
use crate::util::config::{FilterConfig, DEFAULT_SKIP_EXTENSIONS};

/// What to do with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line or `#` comment, dropped silently.
    Ignored,
    /// Dropped with a warning.
    Skipped(SkipReason),
    /// Trimmed text to hand to the parser.
    Candidate(&'a str),
}

/// Pre-filter applied to every input line before parsing.
#[derive(Debug, Clone)]
pub struct LineFilter {
    skip_extensions: Vec<String>,
}

impl Default for LineFilter {
    fn default() -> Self {
        LineFilter {
            skip_extensions: DEFAULT_SKIP_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LineFilter {
    /// Create a filter skipping lines that end in one of `skip_extensions`.
    pub fn new(skip_extensions: Vec<String>) -> Self {
        LineFilter { skip_extensions }
    }

    /// Create a filter from the `[filter]` config section.
    ///
    /// Falls back to the default extensions when none are configured.
    pub fn from_config(config: &FilterConfig) -> Self {
        match &config.skip_extensions {
            Some(extensions) => Self::new(extensions.clone()),
            None => Self::default(),
        }
    }

    /// Classify one raw line.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return LineKind::Ignored;
        }

        if self
            .skip_extensions
            .iter()
            .any(|ext| line.ends_with(ext.as_str()))
        {
            return LineKind::Skipped(SkipReason::FileName);
        }

        if !(line.contains("::") || line.matches('.').count() >= 2) {
            return LineKind::Skipped(SkipReason::NotFqName);
        }

        LineKind::Candidate(line)
    }
}
