pub mod analyze;
pub mod inspect;
pub mod parse;
pub mod profile;

use chrono::Datelike;
use shiftgrid_core::error::ShiftError;
use shiftgrid_core::profile::{builtin, load_profile};
use shiftgrid_core::ParseOptions;
use std::path::PathBuf;

use crate::ParseArgs;

/// Resolve CLI arguments into engine options, defaulting the calendar
/// context to today.
pub fn parse_options(args: &ParseArgs) -> Result<ParseOptions, ShiftError> {
    let today = chrono::Local::now().date_naive();
    let year = args.year.unwrap_or_else(|| today.year());
    let months = if args.months.is_empty() {
        vec![today.month()]
    } else {
        args.months.clone()
    };

    let profile = match &args.profile_file {
        Some(path) => load_profile(path)?,
        None => builtin::load_preset(&args.profile)?,
    };

    let options = ParseOptions::new(year, months).with_profile(profile);
    options.validate()?;
    Ok(options)
}

/// Write rendered output to a file, or print it.
pub fn emit(rendered: &str, out: Option<PathBuf>) -> Result<(), ShiftError> {
    match out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!("Written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
