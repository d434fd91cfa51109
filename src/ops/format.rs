//! Rendering of merged entries as compatibility matrix `<hal>` blocks.

use std::fmt;

use thiserror::Error;

use crate::core::{HalEntry, HalInterface, HalRegistry, HalVersion};

/// Output format for generated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<hal>` XML fragments (default)
    #[default]
    Xml,
    /// The merged registry as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(OutputFormatParseError(s.to_string())),
        }
    }
}

/// Error parsing output format option.
#[derive(Debug, Clone, Error)]
#[error("invalid output format '{0}', valid values: xml, json")]
pub struct OutputFormatParseError(pub String);

/// Options for XML rendering.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Value of the `optional` attribute
    pub optional: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { optional: true }
    }
}

/// Render a version for the `<version>` element.
///
/// A zero minor is written as is (`1.0`). A non-zero minor moves into the
/// range suffix with the visible minor pinned at zero: `1.2` becomes `1.0-2`.
pub fn format_version(version: &HalVersion) -> String {
    if version.is_minor_zero() {
        format!("{}.{}", version.major(), version.minor())
    } else {
        format!("{}.0-{}", version.major(), version.minor())
    }
}

struct XmlInterface<'a>(&'a HalInterface);

impl fmt::Display for XmlInterface<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    <interface>")?;
        writeln!(f, "        <name>{}</name>", self.0.name())?;
        for instance in self.0.instances() {
            writeln!(f, "        <instance>{}</instance>", instance)?;
        }
        writeln!(f, "    </interface>")
    }
}

/// Adapter that renders an entry as one `<hal>` block.
pub struct XmlEntry<'a> {
    entry: &'a HalEntry,
    options: &'a FormatOptions,
}

impl<'a> XmlEntry<'a> {
    pub fn new(entry: &'a HalEntry, options: &'a FormatOptions) -> Self {
        XmlEntry { entry, options }
    }
}

impl fmt::Display for XmlEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<hal format=\"{}\" optional=\"{}\">",
            self.entry.format(),
            self.options.optional
        )?;
        writeln!(f, "    <name>{}</name>", self.entry.name())?;

        for version in self.entry.versions() {
            writeln!(f, "    <version>{}</version>", format_version(version))?;
        }

        for interface in self.entry.interfaces() {
            write!(f, "{}", XmlInterface(interface))?;
        }

        writeln!(f, "</hal>")
    }
}

/// Render one entry as a `<hal>` block.
pub fn format_entry(entry: &HalEntry, options: &FormatOptions) -> String {
    XmlEntry::new(entry, options).to_string()
}

/// Concatenate the `<hal>` blocks of every entry, in registry order.
pub fn format_registry(registry: &HalRegistry, options: &FormatOptions) -> String {
    registry
        .into_iter()
        .map(|entry| format_entry(entry, options))
        .collect()
}

/// Render the merged registry as JSON.
pub fn format_registry_json(registry: &HalRegistry) -> String {
    serde_json::to_string_pretty(registry)
        .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize registry: {}"}}"#, e))
}

/// Render the registry in the requested format.
pub fn format_output(
    registry: &HalRegistry,
    format: OutputFormat,
    options: &FormatOptions,
) -> String {
    match format {
        OutputFormat::Xml => format_registry(registry, options),
        OutputFormat::Json => format_registry_json(registry),
    }
}
