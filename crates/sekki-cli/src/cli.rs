use clap::{Parser, Subcommand};

/// Show the current sekki (micro-season)
#[derive(Parser, Debug)]
#[command(name = "sekki")]
#[command(version, about = "Show the current sekki (micro-season)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the season active on a date
    Resolve(ResolveArgs),
    /// List every season, marking the active one
    List(ListArgs),
    /// Produce a widget refresh timeline
    Timeline(TimelineArgs),
    /// Rewrite a season dataset ordered by start date
    Sort(SortArgs),
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Reference date (YYYY-MM-DD or RFC3339). Defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// IANA timezone used to determine today (defaults to system local)
    #[arg(short, long)]
    pub tz: Option<String>,

    /// Detail level: minimal, medium, full
    #[arg(long, default_value = "full")]
    pub detail: String,

    /// Display mode: widget, app
    #[arg(short, long, default_value = "widget")]
    pub mode: String,

    /// Season dataset file (defaults to the bundled dataset)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Reference date (YYYY-MM-DD or RFC3339). Defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// IANA timezone used to determine today (defaults to system local)
    #[arg(short, long)]
    pub tz: Option<String>,

    /// Detail level: minimal, medium, full
    #[arg(long, default_value = "full")]
    pub detail: String,

    /// Season dataset file (defaults to the bundled dataset)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TimelineArgs {
    /// Reference date (YYYY-MM-DD or RFC3339). Defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// IANA timezone used to determine today (defaults to system local)
    #[arg(short, long)]
    pub tz: Option<String>,

    /// Season dataset file (defaults to the bundled dataset)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// Season dataset file to sort
    #[arg(long)]
    pub input: String,

    /// Where to write the sorted dataset (defaults to rewriting the input)
    #[arg(long)]
    pub output: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
