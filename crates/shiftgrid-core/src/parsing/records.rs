use crate::model::{Axis, Orientation, ShiftRecord, Table};
use crate::parsing::axis::axis_dates;
use crate::parsing::calendar::ColumnDays;
use crate::parsing::dates::{days_in_month, is_numeric, parse_date};
use crate::profile::schema::Profile;
use chrono::NaiveDate;
use tracing::debug;

/// Records from one calendar table for one month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarExtraction {
    pub records: Vec<ShiftRecord>,
    /// Columns skipped because their day does not exist in the month.
    pub dropped_days: usize,
}

/// Whether a trimmed line is a worker token rather than a marker or label.
pub fn is_worker_token(token: &str, profile: &Profile) -> bool {
    !token.is_empty()
        && !is_numeric(token)
        && !profile.is_calendar_label(token)
        && parse_date(token, profile).is_none()
}

/// Worker tokens in a cell: one per non-empty line.
fn cell_tokens<'a>(cell: &'a str, profile: &'a Profile) -> impl Iterator<Item = &'a str> + 'a {
    cell.lines()
        .map(str::trim)
        .filter(move |line| is_worker_token(line, profile))
}

/// Walk the table perpendicular to a date axis.
///
/// For each axis cell holding a date, every other cell on the crossing line
/// contributes its worker tokens, positioned by their signed offset from the
/// axis.
///
/// A cell is split into lines and each line is its own token, rather than
/// the whole cell being one worker. Spreadsheet cells holding "Ana\nBea"
/// name two people on the same slot; both get the cell's position.
pub fn extract_along_axis(table: &Table, axis: Axis, profile: &Profile) -> Vec<ShiftRecord> {
    let mut records = Vec::new();
    let span = match axis.orientation {
        Orientation::Column => table.column_count(),
        Orientation::Row => table.row_count(),
    };

    for (along, date) in axis_dates(table, axis, profile) {
        for across in (0..span).filter(|&i| i != axis.index) {
            let cell = match axis.orientation {
                Orientation::Column => table.cell(along, across),
                Orientation::Row => table.cell(across, along),
            };
            let position = across as i64 - axis.index as i64;
            for token in cell_tokens(cell, profile) {
                records.push(ShiftRecord::new(token, date, Some(position)));
            }
        }
    }

    records
}

/// Emit records from a calendar table whose columns carry day numbers.
///
/// Each line of each cell (below an optional weekday header) is a worker
/// token unless it is a day number, weekday name or calendar label. The
/// position is the row distance from where the column's day number sits.
pub fn extract_calendar(
    table: &Table,
    columns: &ColumnDays,
    year: i32,
    month: u32,
    profile: &Profile,
) -> CalendarExtraction {
    let Some(max_day) = days_in_month(year, month) else {
        return CalendarExtraction::default();
    };

    let mut out = CalendarExtraction::default();
    let mut dates: Vec<Option<NaiveDate>> = Vec::with_capacity(columns.days.len());
    for marker in &columns.days {
        let date = marker.and_then(|m| {
            if m.day > max_day {
                debug!(day = m.day, year, month, "day number outside month, column skipped");
                out.dropped_days += 1;
                None
            } else {
                NaiveDate::from_ymd_opt(year, month, m.day)
            }
        });
        dates.push(date);
    }

    for (row_idx, row) in table.rows.iter().enumerate().skip(columns.start_row) {
        for (col_idx, cell) in row.iter().enumerate() {
            let (Some(Some(date)), Some(Some(marker))) =
                (dates.get(col_idx), columns.days.get(col_idx))
            else {
                continue;
            };
            let position = row_idx as i64 - marker.row as i64;
            for token in cell_tokens(cell, profile) {
                out.records
                    .push(ShiftRecord::new(token, *date, Some(position)));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::calendar::map_day_columns;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_worker_token_filter() {
        let p = Profile::default();
        assert!(is_worker_token("Alice", &p));
        assert!(is_worker_token("LUIS H", &p));
        assert!(!is_worker_token("", &p));
        assert!(!is_worker_token("12", &p));
        assert!(!is_worker_token("Sun", &p));
        assert!(!is_worker_token("día", &p));
        assert!(!is_worker_token("2024-11-01", &p));
    }

    #[test]
    fn test_column_axis_positions() {
        let p = Profile::default();
        let rows: Vec<Vec<String>> = (1..=6)
            .map(|d| {
                vec![
                    "Lead".into(),
                    format!("2024-11-{d:02}"),
                    "Alice".into(),
                    "".into(),
                    "Bob".into(),
                ]
            })
            .collect();
        let t = Table::new(rows);
        let axis = Axis {
            orientation: Orientation::Column,
            index: 1,
        };
        let records = extract_along_axis(&t, axis, &p);
        assert_eq!(records.len(), 18);
        assert_eq!(records[0], ShiftRecord::new("Lead", ymd(2024, 11, 1), Some(-1)));
        assert_eq!(records[1], ShiftRecord::new("Alice", ymd(2024, 11, 1), Some(1)));
        assert_eq!(records[2], ShiftRecord::new("Bob", ymd(2024, 11, 1), Some(3)));
    }

    #[test]
    fn test_row_axis_positions() {
        let p = Profile::default();
        let t = table(&[
            &["Semana", "Día"],
            &["", "2024-11-04"],
            &["", "Ana"],
            &["", "7"],
            &["", "Bea"],
        ]);
        let axis = Axis {
            orientation: Orientation::Row,
            index: 1,
        };
        let records = extract_along_axis(&t, axis, &p);
        assert_eq!(
            records,
            vec![
                ShiftRecord::new("Ana", ymd(2024, 11, 4), Some(1)),
                ShiftRecord::new("Bea", ymd(2024, 11, 4), Some(3)),
            ]
        );
    }

    #[test]
    fn test_axis_cell_lines_are_separate_workers() {
        let p = Profile::default();
        let rows: Vec<Vec<String>> = (1..=6)
            .map(|d| vec![format!("2024-11-{d:02}"), "Ana\nBea".into()])
            .collect();
        let axis = Axis {
            orientation: Orientation::Column,
            index: 0,
        };
        let records = extract_along_axis(&Table::new(rows), axis, &p);
        assert_eq!(records.len(), 12);
        assert_eq!(records[0], ShiftRecord::new("Ana", ymd(2024, 11, 1), Some(1)));
        assert_eq!(records[1], ShiftRecord::new("Bea", ymd(2024, 11, 1), Some(1)));
    }

    #[test]
    fn test_axis_path_skips_numbers_and_weekdays() {
        let p = Profile::default();
        let rows: Vec<Vec<String>> = (1..=6)
            .map(|d| vec![format!("2024-11-{d:02}"), "3".into(), "Fri".into(), "Zoe".into()])
            .collect();
        let axis = Axis {
            orientation: Orientation::Column,
            index: 0,
        };
        let records = extract_along_axis(&Table::new(rows), axis, &p);
        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| r.worker == "Zoe" && r.position == Some(3)));
    }

    #[test]
    fn test_calendar_scenario_with_header() {
        let p = Profile::default();
        let t = table(&[
            &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            &["1\nAlice", "", "", "", "1\nBob", "", ""],
        ]);
        let cols = map_day_columns(&t, &p).unwrap();
        let out = extract_calendar(&t, &cols, 2024, 11, &p);
        assert_eq!(
            out.records,
            vec![
                ShiftRecord::new("Alice", ymd(2024, 11, 1), Some(0)),
                ShiftRecord::new("Bob", ymd(2024, 11, 1), Some(0)),
            ]
        );
    }

    #[test]
    fn test_calendar_positions_follow_rows() {
        let p = Profile::default();
        let t = table(&[
            &["Lun", "Mar"],
            &["2\nAna", "3\nBob"],
            &["Carlos", "Diana"],
            &["Eva\nFrank", ""],
        ]);
        let cols = map_day_columns(&t, &p).unwrap();
        let out = extract_calendar(&t, &cols, 2026, 2, &p);
        let ana = &out.records[0];
        assert_eq!((ana.worker.as_str(), ana.position), ("Ana", Some(0)));
        let frank = out.records.iter().find(|r| r.worker == "Frank").unwrap();
        assert_eq!(frank.date, ymd(2026, 2, 2));
        assert_eq!(frank.position, Some(2));
        assert_eq!(out.records.len(), 6);
    }

    #[test]
    fn test_calendar_drops_days_beyond_month() {
        let p = Profile::default();
        let t = table(&[&["29\nAna", "30\nBob", "31\nCarla"]]);
        let cols = map_day_columns(&t, &p).unwrap();

        let feb = extract_calendar(&t, &cols, 2023, 2, &p);
        assert!(feb.records.is_empty());
        assert_eq!(feb.dropped_days, 3);

        let nov = extract_calendar(&t, &cols, 2024, 11, &p);
        assert_eq!(nov.records.len(), 2);
        assert_eq!(nov.dropped_days, 1);
        assert!(nov.records.iter().all(|r| r.date <= ymd(2024, 11, 30)));
    }

    #[test]
    fn test_calendar_columns_without_day_are_skipped() {
        let p = Profile::default();
        let t = table(&[&["5\nAna", "Bob"]]);
        let cols = map_day_columns(&t, &p).unwrap();
        let out = extract_calendar(&t, &cols, 2024, 11, &p);
        assert_eq!(out.records, vec![ShiftRecord::new("Ana", ymd(2024, 11, 5), Some(0))]);
    }

    #[test]
    fn test_invalid_month_yields_nothing() {
        let p = Profile::default();
        let t = table(&[&["5\nAna"]]);
        let cols = map_day_columns(&t, &p).unwrap();
        assert_eq!(extract_calendar(&t, &cols, 2024, 13, &p), CalendarExtraction::default());
    }
}
