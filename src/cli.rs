//! CLI argument parsing with clap.

use clap::Parser;

/// Family siren-memory poster generator.
#[derive(Parser, Debug)]
#[command(name = "sirengen", version, about)]
pub struct Cli {
    /// Roster file listing family members (TOML `[[member]]` tables, or
    /// JSON by extension).
    pub roster: Option<String>,

    /// Inline member entry: "relation,name,gender,birth_year,siren_year".
    /// Repeatable; appended after the roster file entries.
    #[arg(short = 'm', long = "member")]
    pub member: Vec<String>,

    /// Remove the member at this position before rendering. Repeatable;
    /// indices refer to the list before any removal.
    #[arg(short = 'r', long = "remove", value_name = "INDEX")]
    pub remove: Vec<usize>,

    /// Print the current roster and exit without rendering.
    #[arg(short, long)]
    pub list: bool,

    /// Output file path (auto-generated if not specified).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the poster as a base64 data URI to stdout instead of
    /// writing a file (combine with --output to also write the file).
    #[arg(long)]
    pub data_uri: bool,

    /// Override the current year (for reproducible posters).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
