//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// fcm-gen - generate compatibility matrix <hal> entries from HIDL/AIDL names
#[derive(Parser)]
#[command(name = "fcm-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate <hal> entries from a list of instance names
    Generate(GenerateArgs),

    /// Report lines that would be skipped, without generating output
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// File with one fully-qualified instance name per line
    #[arg(default_value = "fqnames.txt")]
    pub input: PathBuf,

    /// Config file to use instead of .fcm-gen/config.toml
    #[arg(long, env = "FCM_GEN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: xml or json
    #[arg(long)]
    pub format: Option<String>,

    /// Mark generated HALs as required (optional="false")
    #[arg(long)]
    pub required: bool,

    /// Fail if any line is not a valid instance name
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
