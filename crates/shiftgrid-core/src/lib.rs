pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profile;
pub mod sniff;
pub mod stats;

use std::path::Path;

use error::ShiftError;
use extraction::{PdfExtractor, SourceKind};
use model::{ParsedSchedule, ShiftRecord, Table};
use profile::schema::Profile;
use stats::WorkerReport;
use tracing::debug;

/// What the engine needs besides the grid: the calendar context for tables
/// that only carry day numbers, and the locale profile.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub year: i32,
    /// Months (1-12) a day-number calendar is read for. Each month yields
    /// its own records from the same table.
    pub months: Vec<u32>,
    pub profile: Profile,
}

impl ParseOptions {
    pub fn new(year: i32, months: Vec<u32>) -> Self {
        ParseOptions {
            year,
            months,
            profile: Profile::default(),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn validate(&self) -> Result<(), ShiftError> {
        if self.months.is_empty() {
            return Err(ShiftError::InvalidOptions(
                "at least one month is required".into(),
            ));
        }
        if let Some(bad) = self.months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(ShiftError::InvalidOptions(format!(
                "month {bad} is outside 1-12"
            )));
        }
        Ok(())
    }
}

/// Parse a PDF schedule: extract its tables with the given backend, then run
/// the extraction engine over them.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ParseOptions,
) -> Result<ParsedSchedule, ShiftError> {
    options.validate()?;
    let tables = extractor.extract_tables(pdf_bytes)?;
    debug!(backend = extractor.backend_name(), tables = tables.len(), "pdf tables extracted");
    parsing::parse_tables(&tables, SourceKind::Pdf, options)
}

/// Parse a workbook schedule; every worksheet is one table.
pub fn parse_spreadsheet(
    bytes: &[u8],
    options: &ParseOptions,
) -> Result<ParsedSchedule, ShiftError> {
    options.validate()?;
    let tables = extraction::spreadsheet::read_workbook(bytes)?;
    parsing::parse_tables(&tables, SourceKind::Spreadsheet, options)
}

pub fn parse_csv(bytes: &[u8], options: &ParseOptions) -> Result<ParsedSchedule, ShiftError> {
    options.validate()?;
    let table = extraction::delimited::read_csv(bytes)?;
    parsing::parse_tables(&[table], SourceKind::Csv, options)
}

/// Parse a pre-extracted JSON grid (one table or a list of tables).
pub fn parse_json_grid(
    bytes: &[u8],
    options: &ParseOptions,
) -> Result<ParsedSchedule, ShiftError> {
    options.validate()?;
    let tables = extraction::tables_from_json(bytes)?;
    parsing::parse_tables(&tables, SourceKind::JsonGrid, options)
}

/// Read a document into tables, picking the reader from the file extension.
pub fn read_tables(
    path: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<(SourceKind, Vec<Table>), ShiftError> {
    let source = SourceKind::from_path(path)?;
    let bytes = std::fs::read(path)?;
    let tables = match source {
        SourceKind::Pdf => extractor.extract_tables(&bytes)?,
        SourceKind::Spreadsheet => extraction::spreadsheet::read_workbook(&bytes)?,
        SourceKind::Csv => vec![extraction::delimited::read_csv(&bytes)?],
        SourceKind::JsonGrid => extraction::tables_from_json(&bytes)?,
    };
    debug!(path = %path.display(), source = %source, tables = tables.len(), "document read");
    Ok((source, tables))
}

/// Main API entry point: parse any supported schedule document.
///
/// Unsupported file types are the only document-level failure; tables the
/// heuristics do not recognize come back as empty outcomes with a warning.
pub fn parse_file(
    path: &Path,
    extractor: &dyn PdfExtractor,
    options: &ParseOptions,
) -> Result<ParsedSchedule, ShiftError> {
    options.validate()?;
    let (source, tables) = read_tables(path, extractor)?;
    parsing::parse_tables(&tables, source, options)
}

/// Per-worker statistics for a shift dataset.
pub fn analyze(records: &[ShiftRecord]) -> Vec<WorkerReport> {
    stats::aggregate(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_validation() {
        assert!(ParseOptions::new(2024, vec![11, 12]).validate().is_ok());
        assert!(matches!(
            ParseOptions::new(2024, vec![]).validate(),
            Err(ShiftError::InvalidOptions(_))
        ));
        assert!(matches!(
            ParseOptions::new(2024, vec![0]).validate(),
            Err(ShiftError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_parse_csv_date_column() {
        let csv = "01/11/2024,Ana,Bea\n02/11/2024,Bea,Ana\n03/11/2024,Ana,Carla\n\
                   04/11/2024,Carla,Bea\n05/11/2024,Ana,Bea\n06/11/2024,Bea,Carla\n";
        let parsed = parse_csv(csv.as_bytes(), &ParseOptions::new(2024, vec![11])).unwrap();
        assert_eq!(parsed.records.len(), 12);
        let reports = analyze(&parsed.records);
        let names: Vec<&str> = reports.iter().map(|r| r.worker.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bea", "Carla"]);
    }

    #[test]
    fn test_unsupported_extension_aborts() {
        let extractor = extraction::pdftotext::PdftotextExtractor::new();
        let err = parse_file(
            Path::new("schedule.docx"),
            &extractor,
            &ParseOptions::new(2024, vec![11]),
        )
        .unwrap_err();
        assert!(matches!(err, ShiftError::UnsupportedSource(_)));
    }
}
