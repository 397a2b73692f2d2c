//! Sirengen - family siren-memory poster generator.

mod cli;
mod config;
mod error;
mod member;
mod output;
mod render;
mod roster;
mod store;

use std::path::Path;
use std::process;

use chrono::Datelike;
use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::PosterError;
use crate::output::{data_uri, encode_png, resolve_output_path, save_poster};
use crate::render::render_poster;
use crate::roster::{load_roster, parse_member_spec};
use crate::store::RecordStore;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PosterError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(PosterError::Config)?;
    config.poster.validate().map_err(PosterError::Config)?;

    let current_year = match cli.year {
        Some(y) => validate_year(y)?,
        None => chrono::Utc::now().year(),
    };

    if cli.verbose {
        eprintln!("Current year: {current_year}");
        eprintln!("Canvas: {}x{}", config.poster.width, config.poster.height);
    }

    // Build the record store: roster file first, then inline entries
    let mut store = RecordStore::new(current_year);

    if let Some(ref path) = cli.roster {
        for entry in load_roster(Path::new(path)).map_err(PosterError::Roster)? {
            store.add(entry)?;
        }
    }
    for spec in &cli.member {
        let entry = parse_member_spec(spec).map_err(PosterError::InvalidArgument)?;
        store.add(entry)?;
    }

    // Descending order so every --remove index refers to the pre-removal list
    let mut removals = cli.remove.clone();
    removals.sort_unstable_by(|a, b| b.cmp(a));
    removals.dedup();
    for index in removals {
        store.remove_at(index);
    }

    if cli.list {
        print_roster(&store);
        return Ok(());
    }

    let poster = render_poster(store.list(), current_year, &config.poster)?;
    let bytes = encode_png(&poster)?;

    if cli.data_uri {
        println!("{}", data_uri(&bytes));
    }
    if !cli.data_uri || cli.output.is_some() {
        let output_path = resolve_output_path(cli.output.as_deref(), &config.poster.title);
        save_poster(&bytes, &output_path)?;
        eprintln!("Saved: {}", output_path.display());
    }

    Ok(())
}

fn validate_year(year: i32) -> Result<i32, PosterError> {
    if (store::MIN_YEAR..=9999).contains(&year) {
        Ok(year)
    } else {
        Err(PosterError::InvalidArgument(format!("Year {year} is out of range (1900..=9999)")))
    }
}

fn print_roster(store: &RecordStore) {
    if store.is_empty() {
        println!("(no family members)");
        return;
    }
    for (i, m) in store.list().iter().enumerate() {
        let relation =
            if m.relation.is_empty() { String::new() } else { format!(" ({})", m.relation) };
        println!(
            "{i}: {}{relation} - {} - born {}, first siren {} (age {})",
            m.name,
            m.gender,
            m.birth_year,
            m.siren_year,
            m.age_at_first_siren()
        );
    }
}
