//! Command implementations

pub mod check;
pub mod completions;
pub mod generate;

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::InputArgs;
use fcm_gen::util::config::{self, Config};

/// Load the configuration for a run.
///
/// An explicit `--config` file must exist and parse; otherwise the global and
/// project files are layered and fall back to defaults.
pub fn load_config(args: &InputArgs) -> Result<Config> {
    let global = config::global_config_path();

    if let Some(path) = &args.config {
        let mut config = match &global {
            Some(global) => Config::load_or_default(global),
            None => Config::default(),
        };
        config.merge(Config::load(path)?);
        return Ok(config);
    }

    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(config::load_config(
        global.as_deref(),
        &config::project_config_path(&cwd),
    ))
}

/// Read the input file as a list of lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file: {}", path.display()))?;

    Ok(contents.lines().map(str::to_string).collect())
}
