//! `fcm-gen generate` command

use anyhow::{bail, Context, Result};

use super::{load_config, read_lines};
use crate::cli::GenerateArgs;
use fcm_gen::ops::{build_registry, format_output, FormatOptions, LineFilter, OutputFormat};

pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = load_config(&args.input)?;

    let format: OutputFormat = match &args.format {
        Some(format) => format
            .parse()
            .with_context(|| format!("invalid output format: {}", format))?,
        None => config.output_format().unwrap_or_default(),
    };
    let options = FormatOptions {
        optional: config.optional() && !args.required,
    };

    let lines = read_lines(&args.input.input)?;
    let filter = LineFilter::from_config(&config.filter);
    let report = build_registry(&lines, &filter);

    if args.strict && report.has_malformed() {
        bail!(
            "{} invalid instance name(s) in {}\n\
             help: Run `fcm-gen check {}` for details",
            report.malformed().count(),
            args.input.input.display(),
            args.input.input.display()
        );
    }

    let output = format_output(&report.registry, format, &options);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            tracing::info!(
                "Wrote {} entries to {}",
                report.registry.len(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}
