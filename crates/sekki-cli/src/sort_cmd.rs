use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use sekki_core::Catalog;
use serde::Serialize;
use tracing::info;

use crate::cli::SortArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat, to_json_output};

pub fn run_sort(args: SortArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let output = args.output.as_deref().unwrap_or(&args.input);

    let count = sort_file(&args.input, output)
        .map_err(|e| CliError::runtime(format!("{e:#}")))?;

    let summary = SortSummary {
        input: args.input.clone(),
        output: output.to_string(),
        count,
    };

    match output_format {
        OutputFormat::Json => {
            println!("{}", to_json_output(&summary)?);
        }
        OutputFormat::Text => {
            println!("Sorted {} seasons into {}", summary.count, summary.output);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct SortSummary {
    input: String,
    output: String,
    count: usize,
}

/// Rewrite the dataset at `input` into `output`, ordered by start date.
///
/// Unlike resolution, sorting refuses corrupt data rather than writing out
/// an empty dataset.
fn sort_file(input: &str, output: &str) -> Result<usize> {
    let json =
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {input}"))?;
    let catalog =
        Catalog::from_json(&json).with_context(|| format!("Failed to parse file: {input}"))?;

    let sorted = catalog.sorted_by_start_date();
    let encoded = sorted
        .to_json_pretty()
        .context("Failed to encode sorted season data")?;

    fs::write(output, format!("{encoded}\n"))
        .with_context(|| format!("Failed to write file: {output}"))?;

    info!(input, output, count = sorted.len(), "Sorted season data");
    Ok(sorted.len())
}
