use crate::model::{Axis, Orientation, Table};
use crate::parsing::dates::parse_date;
use crate::profile::schema::Profile;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Locate the date axis of a table.
///
/// Leading columns are tried first, then leading rows, lower index first.
/// The first candidate holding at least `profile.min_axis_dates` distinct
/// dates wins; nothing else is compared.
pub fn locate_axis(table: &Table, profile: &Profile) -> Option<Axis> {
    candidates(table, profile)
        .into_iter()
        .find(|axis| qualifies(table, *axis, profile))
}

/// Candidate axes in priority order.
pub fn candidates(table: &Table, profile: &Profile) -> Vec<Axis> {
    let depth = profile.axis_scan_depth;
    let columns = (0..table.column_count().min(depth)).map(|index| Axis {
        orientation: Orientation::Column,
        index,
    });
    let rows = (0..table.row_count().min(depth)).map(|index| Axis {
        orientation: Orientation::Row,
        index,
    });
    columns.chain(rows).collect()
}

/// Whether a candidate holds enough distinct dates to be the axis.
pub fn qualifies(table: &Table, axis: Axis, profile: &Profile) -> bool {
    let distinct: BTreeSet<NaiveDate> = axis_dates(table, axis, profile)
        .into_iter()
        .map(|(_, date)| date)
        .collect();
    distinct.len() >= profile.min_axis_dates
}

/// Dates found along an axis, paired with their position on it.
/// Cells that do not parse are skipped.
pub fn axis_dates(table: &Table, axis: Axis, profile: &Profile) -> Vec<(usize, NaiveDate)> {
    let len = match axis.orientation {
        Orientation::Column => table.row_count(),
        Orientation::Row => table.column_count(),
    };

    (0..len)
        .filter_map(|i| {
            let text = match axis.orientation {
                Orientation::Column => table.cell(i, axis.index),
                Orientation::Row => table.cell(axis.index, i),
            };
            parse_date(text, profile).map(|d| (i, d))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn date_rows(n: usize) -> Vec<Vec<String>> {
        (1..=n)
            .map(|d| vec![format!("2024-11-{d:02}"), "Alice".into(), "Bob".into()])
            .collect()
    }

    #[test]
    fn test_column_axis_found() {
        let t = Table::new(date_rows(7));
        let axis = locate_axis(&t, &Profile::default()).unwrap();
        assert_eq!(axis.orientation, Orientation::Column);
        assert_eq!(axis.index, 0);
    }

    #[test]
    fn test_five_dates_is_below_threshold() {
        let t = Table::new(date_rows(5));
        assert_eq!(locate_axis(&t, &Profile::default()), None);
    }

    #[test]
    fn test_six_dates_meets_threshold() {
        let t = Table::new(date_rows(6));
        assert!(locate_axis(&t, &Profile::default()).is_some());
    }

    #[test]
    fn test_repeated_dates_count_once() {
        let mut rows = date_rows(5);
        rows.push(vec!["2024-11-01".into(), "Carol".into()]);
        rows.push(vec!["2024-11-02".into(), "Dave".into()]);
        let t = Table::new(rows);
        assert_eq!(locate_axis(&t, &Profile::default()), None);
    }

    #[test]
    fn test_row_axis_found() {
        let t = table(&[
            &[
                "Turno",
                "2024-11-01",
                "2024-11-02",
                "2024-11-03",
                "2024-11-04",
                "2024-11-05",
                "2024-11-06",
            ],
            &["1", "Ana", "Bob", "Carlos", "Diana", "Eva", "Frank"],
        ]);
        let axis = locate_axis(&t, &Profile::default()).unwrap();
        assert_eq!(
            axis,
            Axis {
                orientation: Orientation::Row,
                index: 0
            }
        );
    }

    #[test]
    fn test_column_wins_over_row() {
        // Row 0 and column 0 both hold dates; columns are tried first.
        let mut rows = vec![(0..7).map(|d| format!("2024-12-{:02}", d + 1)).collect::<Vec<_>>()];
        rows.extend(date_rows(7));
        let t = Table::new(rows);
        let axis = locate_axis(&t, &Profile::default()).unwrap();
        assert_eq!(axis.orientation, Orientation::Column);
    }

    #[test]
    fn test_lower_column_index_wins() {
        let rows: Vec<Vec<String>> = (1..=7)
            .map(|d| {
                vec![
                    "x".into(),
                    format!("2024-11-{d:02}"),
                    format!("2024-12-{d:02}"),
                ]
            })
            .collect();
        let axis = locate_axis(&Table::new(rows), &Profile::default()).unwrap();
        assert_eq!(axis.index, 1);
    }

    #[test]
    fn test_column_beyond_scan_depth_ignored() {
        let rows: Vec<Vec<String>> = (1..=7)
            .map(|d| {
                let mut r = vec![String::new(); 6];
                r[5] = format!("2024-11-{d:02}");
                r
            })
            .collect();
        assert_eq!(locate_axis(&Table::new(rows), &Profile::default()), None);
    }

    #[test]
    fn test_empty_table_has_no_axis() {
        assert_eq!(locate_axis(&Table::default(), &Profile::default()), None);
    }
}
