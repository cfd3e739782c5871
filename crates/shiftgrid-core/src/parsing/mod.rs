pub mod axis;
pub mod calendar;
pub mod dates;
pub mod records;

use crate::error::ShiftError;
use crate::extraction::SourceKind;
use crate::model::{ParsedSchedule, ShiftRecord, Strategy, Table, TableOutcome};
use crate::ParseOptions;
use axis::locate_axis;
use calendar::{has_weekday_header, looks_like_calendar, map_day_columns};
use records::{extract_along_axis, extract_calendar};
use tracing::{debug, info, warn};

/// Turn a document's tables into one shift dataset.
///
/// Each table goes through the pipeline on its own and results are
/// concatenated in table order. A table no heuristic recognizes contributes
/// nothing and is reported in `tables` and `warnings`; only invalid options
/// are an error.
pub fn parse_tables(
    tables: &[Table],
    source: SourceKind,
    options: &ParseOptions,
) -> Result<ParsedSchedule, ShiftError> {
    options.validate()?;

    let mut parsed = ParsedSchedule::default();
    for (table_index, table) in tables.iter().enumerate() {
        let (outcome, records) = parse_table(table_index, table, source, options);
        if outcome.strategy == Strategy::Unrecognized && !table.is_empty() {
            warn!(table = table_index, "no date axis or calendar columns found");
            parsed.warnings.push(format!(
                "table {} ({}x{}): no date axis or day-number columns found",
                table_index + 1,
                outcome.rows,
                outcome.columns
            ));
        } else if outcome.dropped_days > 0 {
            parsed.warnings.push(format!(
                "table {}: {} day column(s) fall outside the requested month(s)",
                table_index + 1,
                outcome.dropped_days
            ));
        }
        parsed.records.extend(records);
        parsed.tables.push(outcome);
    }

    info!(
        tables = tables.len(),
        records = parsed.records.len(),
        source = %source,
        "parsed schedule"
    );
    Ok(parsed)
}

/// Run one table through the strategy order for its source.
///
/// PDF tables that look like a calendar go to the day-number column mapper,
/// everything else to the date-axis locator. Spreadsheet-like sources try
/// the axis first and fall back to the column mapper only under a weekday
/// header; a bare run of small integers there is hours or IDs, not days.
fn parse_table(
    table_index: usize,
    table: &Table,
    source: SourceKind,
    options: &ParseOptions,
) -> (TableOutcome, Vec<ShiftRecord>) {
    let profile = &options.profile;
    let calendar_first = source == SourceKind::Pdf && looks_like_calendar(table, profile);

    let attempt = if calendar_first {
        read_calendar(table, options)
    } else {
        read_axis(table, options).or_else(|| {
            let calendar = if source == SourceKind::Pdf {
                looks_like_calendar(table, profile)
            } else {
                has_weekday_header(table, profile)
            };
            if calendar {
                read_calendar(table, options)
            } else {
                None
            }
        })
    };

    let (strategy, records, dropped_days) =
        attempt.unwrap_or((Strategy::Unrecognized, Vec::new(), 0));
    debug!(table = table_index, strategy = %strategy, records = records.len(), "table read");

    let outcome = TableOutcome {
        table_index,
        rows: table.row_count(),
        columns: table.column_count(),
        strategy,
        records: records.len(),
        dropped_days,
    };
    (outcome, records)
}

type Attempt = Option<(Strategy, Vec<ShiftRecord>, usize)>;

fn read_axis(table: &Table, options: &ParseOptions) -> Attempt {
    let axis = locate_axis(table, &options.profile)?;
    let records = extract_along_axis(table, axis, &options.profile);
    Some((
        Strategy::DateAxis {
            orientation: axis.orientation,
            index: axis.index,
        },
        records,
        0,
    ))
}

fn read_calendar(table: &Table, options: &ParseOptions) -> Attempt {
    let columns = map_day_columns(table, &options.profile)?;
    let mut records = Vec::new();
    let mut dropped_days = 0;
    for &month in &options.months {
        let out = extract_calendar(table, &columns, options.year, month, &options.profile);
        records.extend(out.records);
        dropped_days += out.dropped_days;
    }
    Some((
        Strategy::CalendarColumns {
            weekday_header: columns.weekday_header,
            resolved_columns: columns.resolved_columns(),
        },
        records,
        dropped_days,
    ))
}
