use crate::error::ShiftError;
use crate::model::Table;

/// Read a CSV file as a single headerless table.
///
/// The delimiter is `;` when the first line has more semicolons than
/// commas (spreadsheet exports in comma-decimal locales), `,` otherwise.
pub fn read_csv(bytes: &[u8]) -> Result<Table, ShiftError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sniff_delimiter(bytes))
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.trim().to_string()).collect());
    }
    Ok(Table::new(rows))
}

fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let first_line = bytes.split(|&b| b == b'\n').next().unwrap_or_default();
    let semicolons = first_line.iter().filter(|&&b| b == b';').count();
    let commas = first_line.iter().filter(|&&b| b == b',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}
