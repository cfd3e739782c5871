use std::io::Cursor;

use calamine::{Data, DataType, Reader};
use tracing::debug;

use crate::error::ShiftError;
use crate::model::Table;

/// Read every worksheet of a workbook (xlsx, xlsm, xlsb, xls, ods) as a table.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<Table>, ShiftError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| ShiftError::Spreadsheet(format!("failed to open workbook: {e}")))?;

    let mut tables = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ShiftError::Spreadsheet(format!("sheet '{name}' unreadable: {e}")))?;

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_as_string).collect())
            .collect();
        debug!(sheet = %name, rows = rows.len(), "worksheet read");
        tables.push(Table::new(rows));
    }

    Ok(tables)
}

/// Render a cell the way the extraction heuristics expect to see it.
///
/// Date cells become ISO dates, whole floats lose their ".0" so they read as
/// day numbers, and errors read as empty.
fn cell_as_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => float_as_string(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match cell.as_date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => float_as_string(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

fn float_as_string(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{f}")
    }
}
