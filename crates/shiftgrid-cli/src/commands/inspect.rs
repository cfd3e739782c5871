use shiftgrid_core::error::ShiftError;
use shiftgrid_core::extraction::pdftotext::PdftotextExtractor;
use shiftgrid_core::sniff::sniff_structure;
use std::path::Path;

use crate::output;

/// Sniff the calendar structure of a document's flattened text.
pub fn sniff(input_file: &Path, output_format: &str) -> Result<(), ShiftError> {
    let extractor = PdftotextExtractor::new();
    let (_, tables) = shiftgrid_core::read_tables(input_file, &extractor)?;
    let text = tables
        .iter()
        .map(|t| t.to_text())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let structure = sniff_structure(&text);
    match output_format {
        "json" => println!("{}", output::json::render(&structure)?),
        _ => output::table::print_structure(&structure),
    }
    Ok(())
}

/// Print what the grid normalizer produced, table by table.
pub fn tables(input_file: &Path) -> Result<(), ShiftError> {
    let extractor = PdftotextExtractor::new();
    let (source, tables) = shiftgrid_core::read_tables(input_file, &extractor)?;
    println!("{} table(s) read from {} source\n", tables.len(), source);
    output::table::print_tables(&tables);
    Ok(())
}
