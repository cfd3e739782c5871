use shiftgrid_core::error::ShiftError;
use shiftgrid_core::extraction::pdftotext::PdftotextExtractor;
use shiftgrid_core::extraction::SourceKind;
use shiftgrid_core::model::{ParsedSchedule, ShiftRecord};
use shiftgrid_core::ParseOptions;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::output;
use crate::ParseArgs;

pub fn run(
    input_file: PathBuf,
    args: &ParseArgs,
    aliases: &[String],
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ShiftError> {
    let options = super::parse_options(args)?;
    let aliases = parse_aliases(aliases)?;
    let parsed = load_schedule(&input_file, &options)?;

    if parsed.records.is_empty() {
        output::table::print_empty_warning(&parsed, &options);
        return Err(ShiftError::NoShifts(input_file.display().to_string()));
    }
    for w in &parsed.warnings {
        eprintln!("warning: {w}");
    }

    let records = apply_aliases(parsed.records, &aliases);
    let reports = shiftgrid_core::analyze(&records);
    info!(workers = reports.len(), shifts = records.len(), "analysis done");

    let rendered = match output_format {
        "json" => output::json::render(&reports)?,
        "csv" => output::csv::reports(&reports)?,
        _ => output::table::format_reports(&reports),
    };
    super::emit(&rendered, output_file)
}

/// Parse the document, or load the records a previous `parse -O` wrote.
fn load_schedule(input_file: &Path, options: &ParseOptions) -> Result<ParsedSchedule, ShiftError> {
    if SourceKind::from_path(input_file)? == SourceKind::JsonGrid {
        let bytes = std::fs::read(input_file)?;
        if let Ok(parsed) = serde_json::from_slice::<ParsedSchedule>(&bytes) {
            info!(records = parsed.records.len(), "loaded parsed records");
            return Ok(parsed);
        }
        return shiftgrid_core::parse_json_grid(&bytes, options);
    }
    let extractor = PdftotextExtractor::new();
    shiftgrid_core::parse_file(input_file, &extractor, options)
}

/// Parse `FROM=TO` pairs. Matching on FROM is case-insensitive.
fn parse_aliases(raw: &[String]) -> Result<Vec<(String, String)>, ShiftError> {
    raw.iter()
        .map(|pair| {
            let (from, to) = pair.split_once('=').ok_or_else(|| {
                ShiftError::InvalidOptions(format!("alias '{pair}' must look like FROM=TO"))
            })?;
            let (from, to) = (from.trim(), to.trim());
            if from.is_empty() || to.is_empty() {
                return Err(ShiftError::InvalidOptions(format!(
                    "alias '{pair}' has an empty side"
                )));
            }
            Ok((from.to_lowercase(), to.to_string()))
        })
        .collect()
}

fn apply_aliases(records: Vec<ShiftRecord>, aliases: &[(String, String)]) -> Vec<ShiftRecord> {
    if aliases.is_empty() {
        return records;
    }
    records
        .into_iter()
        .map(|mut record| {
            let key = record.worker.to_lowercase();
            if let Some((_, to)) = aliases.iter().find(|(from, _)| *from == key) {
                record.worker = to.clone();
            }
            record
        })
        .collect()
}
