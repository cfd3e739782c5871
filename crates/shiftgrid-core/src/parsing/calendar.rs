use crate::model::Table;
use crate::parsing::dates::parse_day_number;
use crate::profile::schema::Profile;

/// A column's day-of-month and the row it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMarker {
    pub day: u32,
    pub row: usize,
}

/// Day number resolved per column of a calendar table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDays {
    pub weekday_header: bool,
    /// First row holding calendar data (1 when a weekday header is skipped).
    pub start_row: usize,
    pub days: Vec<Option<DayMarker>>,
}

impl ColumnDays {
    pub fn resolved_columns(&self) -> usize {
        self.days.iter().filter(|d| d.is_some()).count()
    }
}

/// Whether the first row is a weekday-name header.
///
/// Every non-empty cell must be a weekday name, and at least one cell must
/// be non-empty.
pub fn has_weekday_header(table: &Table, profile: &Profile) -> bool {
    let Some(first) = table.rows.first() else {
        return false;
    };
    let mut non_empty = first.iter().map(|c| c.trim()).filter(|c| !c.is_empty()).peekable();
    non_empty.peek().is_some() && non_empty.all(|c| profile.is_weekday_name(c))
}

/// Resolve one day number per column.
///
/// Rows are scanned top to bottom; within a cell, the first line that is an
/// integer in 1..=31 fixes the column's day and later rows never override it.
/// Returns None when no column resolves, meaning the table is not a calendar.
pub fn map_day_columns(table: &Table, profile: &Profile) -> Option<ColumnDays> {
    let weekday_header = has_weekday_header(table, profile);
    let start_row = usize::from(weekday_header);
    let mut days: Vec<Option<DayMarker>> = vec![None; table.column_count()];

    for (row_idx, row) in table.rows.iter().enumerate().skip(start_row) {
        for (col_idx, cell) in row.iter().enumerate() {
            if days[col_idx].is_some() {
                continue;
            }
            if let Some(day) = cell.lines().find_map(parse_day_number) {
                days[col_idx] = Some(DayMarker { day, row: row_idx });
            }
        }
    }

    let columns = ColumnDays {
        weekday_header,
        start_row,
        days,
    };
    if columns.resolved_columns() == 0 {
        None
    } else {
        Some(columns)
    }
}

/// Count every day-number line in the table.
pub fn count_day_markers(table: &Table) -> usize {
    table
        .rows
        .iter()
        .flatten()
        .flat_map(|cell| cell.lines())
        .filter(|line| parse_day_number(line).is_some())
        .count()
}

/// A table reads as a calendar when it has a weekday header or enough
/// day-number lines.
pub fn looks_like_calendar(table: &Table, profile: &Profile) -> bool {
    has_weekday_header(table, profile)
        || count_day_markers(table) >= profile.calendar_min_day_markers
}
