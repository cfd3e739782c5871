use shiftgrid_core::error::ShiftError;
use shiftgrid_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;
use crate::ParseArgs;

pub fn run(
    input_file: PathBuf,
    args: &ParseArgs,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ShiftError> {
    let options = super::parse_options(args)?;
    let extractor = PdftotextExtractor::new();
    let parsed = shiftgrid_core::parse_file(&input_file, &extractor, &options)?;

    let rendered = match output_format {
        "json" => output::json::render(&parsed)?,
        "csv" => output::csv::records(&parsed.records)?,
        _ => output::table::format_parsed(&parsed),
    };

    match output_file {
        Some(path) => {
            // Always JSON on disk; `analyze` reads it back
            std::fs::write(&path, output::json::render(&parsed)?)?;
            eprintln!(
                "Parsed {} shift(s) from {} table(s), written to {}",
                parsed.records.len(),
                parsed.tables.len(),
                path.display()
            );
            for w in &parsed.warnings {
                eprintln!("  warning: {w}");
            }
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
