use std::process::ExitCode;

use sekki_core::render::{card_text, widget_text};
use sekki_core::{DisplayMode, resolve};
use tracing::debug;

use crate::cli::ResolveArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, to_json_output};
use crate::shared::{load_catalog, parse_detail, parse_mode, reference_date};

pub fn run_resolve(args: ResolveArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let detail = parse_detail(&args.detail)?;
    let mode = parse_mode(&args.mode)?;
    let date = reference_date(args.date.as_deref(), args.tz.as_deref())?;
    let catalog = load_catalog(args.catalog.as_deref());

    let resolution = resolve(&catalog, date, detail, mode);
    debug!(%date, season = %resolution.season.id, "Resolved season");

    match output_format {
        OutputFormat::Json => {
            println!("{}", to_json_output(&resolution)?);
        }
        OutputFormat::Text => {
            let text = match mode {
                DisplayMode::Widget => widget_text(&resolution.season, detail),
                DisplayMode::App => card_text(&resolution.season, false),
            };
            println!("{}", text);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
