use std::process::ExitCode;

use sekki_core::timeline::timeline;

use crate::cli::TimelineArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat, to_json_output};
use crate::shared::{load_catalog, reference_date};

pub fn run_timeline(args: TimelineArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let date = reference_date(args.date.as_deref(), args.tz.as_deref())?;
    let catalog = load_catalog(args.catalog.as_deref());

    let timeline = timeline(&catalog, date);

    match output_format {
        OutputFormat::Json => {
            println!("{}", to_json_output(&timeline)?);
        }
        OutputFormat::Text => {
            for entry in &timeline.entries {
                println!("{}: {} {}", entry.date, entry.season.kanji, entry.season.id);
            }
            println!("Refresh after: {}", timeline.refresh_after);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
