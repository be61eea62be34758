use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod error;
mod list_cmd;
mod resolve_cmd;
mod shared;
mod sort_cmd;
mod timeline_cmd;

use cli::{Cli, Commands};
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use list_cmd::run_list;
use resolve_cmd::run_resolve;
use sort_cmd::run_sort;
use timeline_cmd::run_timeline;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Resolve(args) => {
            let format = args.output_format.clone();
            dispatch(&format, args, run_resolve)
        }
        Commands::List(args) => {
            let format = args.output_format.clone();
            dispatch(&format, args, run_list)
        }
        Commands::Timeline(args) => {
            let format = args.output_format.clone();
            dispatch(&format, args, run_timeline)
        }
        Commands::Sort(args) => {
            let format = args.output_format.clone();
            dispatch(&format, args, run_sort)
        }
    }
}

/// Resolve the output format, run the command, and render any error in
/// that format.
fn dispatch<A>(
    output_format: &str,
    args: A,
    run: fn(A, OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(args, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}
