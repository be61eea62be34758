use std::process::ExitCode;

use sekki_core::render::card_text;
use sekki_core::{DisplayMode, list_seasons};

use crate::cli::ListArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, to_json_output};
use crate::shared::{load_catalog, parse_detail, reference_date};

pub fn run_list(args: ListArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let detail = parse_detail(&args.detail)?;
    let date = reference_date(args.date.as_deref(), args.tz.as_deref())?;
    let catalog = load_catalog(args.catalog.as_deref());

    let seasons = list_seasons(&catalog, date, detail, DisplayMode::App);

    match output_format {
        OutputFormat::Json => {
            println!("{}", to_json_output(&seasons)?);
        }
        OutputFormat::Text => {
            let cards: Vec<String> = seasons
                .iter()
                .map(|listed| card_text(&listed.season, listed.current))
                .collect();
            println!("{}", cards.join("\n\n"));
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
