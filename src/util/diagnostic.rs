//! User-facing diagnostic messages.
//!
//! Skipped input lines are reported as warnings that point at the offending
//! line and, where there is one, suggest what the line should look like.

use std::fmt;

use crate::ops::generate::{SkipReason, SkippedLine};

/// Common suggestion messages for consistent output.
pub mod suggestions {
    /// Suggestion for a malformed HIDL name.
    pub const HIDL_SHAPE: &str = "HIDL names look like `android.hardware.foo@1.0::IFoo/default`";

    /// Suggestion for a malformed AIDL name.
    pub const AIDL_SHAPE: &str = "AIDL names look like `android.hardware.foo.IFoo/default`";

    /// Suggestion for a file name in the input.
    pub const FILE_NAME: &str = "Remove file names from the input list";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Related location (`file:line`)
    pub location: Option<String>,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity,
            location: None,
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create a new note.
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Severity::Note, message)
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Build the warning for one skipped input line.
    pub fn for_skipped_line(source: &str, skipped: &SkippedLine) -> Self {
        let diag = Diagnostic::warning(skipped.reason.to_string())
            .with_location(format!("{}:{}", source, skipped.line_number))
            .with_context(skipped.text.clone());

        match &skipped.reason {
            SkipReason::FileName => diag.with_suggestion(suggestions::FILE_NAME),
            SkipReason::NotFqName => diag
                .with_suggestion(suggestions::HIDL_SHAPE)
                .with_suggestion(suggestions::AIDL_SHAPE),
            SkipReason::Malformed(_) if skipped.text.contains('@') => {
                diag.with_suggestion(suggestions::HIDL_SHAPE)
            }
            SkipReason::Malformed(_) => diag.with_suggestion(suggestions::AIDL_SHAPE),
        }
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = if color {
            match self.severity {
                Severity::Error => "\x1b[1;31merror\x1b[0m".to_string(),
                Severity::Warning => "\x1b[1;33mwarning\x1b[0m".to_string(),
                Severity::Note => "\x1b[1;36mnote\x1b[0m".to_string(),
            }
        } else {
            self.severity.to_string()
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref location) = self.location {
            output.push_str(&format!("  --> {}\n", location));
        }

        for ctx in &self.context {
            output.push_str(&format!("   | {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            for suggestion in &self.suggestions {
                output.push_str(&format!("  = {}: {}\n", help_prefix, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
