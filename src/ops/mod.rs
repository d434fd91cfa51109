//! High-level operations.
//!
//! These implement the generator pipeline on top of the core types.

pub mod filter;
pub mod format;
pub mod generate;

pub use filter::{LineFilter, LineKind};
pub use format::{format_entry, format_output, format_registry, FormatOptions, OutputFormat};
pub use generate::{build_registry, generate_manifest, GenerateReport, SkipReason, SkippedLine};
