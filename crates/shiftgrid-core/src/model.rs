use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A table as handed over by a grid source: ordered rows of cell strings.
///
/// Rows may be ragged. An empty string is an empty cell; a cell may hold
/// several newline-separated tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

/// Reads `[[cell, ...], ...]`; `null` cells read as empty.
impl<'de> Deserialize<'de> for Table {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<Vec<Option<String>>> = Vec::deserialize(deserializer)?;
        Ok(Table::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
                .collect(),
        ))
    }
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Table { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.iter().all(|c| c.trim().is_empty()))
    }

    /// Cell text at (row, col); out-of-range positions read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Flatten into plain text: one line per non-empty row, cells joined by a space.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .filter_map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
                    .filter(|c| !c.is_empty())
                    .collect();
                if cells.is_empty() {
                    None
                } else {
                    Some(cells.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One worker on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Raw extracted token, trimmed but otherwise untouched.
    pub worker: String,
    pub date: NaiveDate,
    /// Signed cell offset from the cell anchoring the date.
    pub position: Option<i64>,
}

impl ShiftRecord {
    pub fn new(worker: impl Into<String>, date: NaiveDate, position: Option<i64>) -> Self {
        ShiftRecord {
            worker: worker.into(),
            date,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Dates run down a column.
    Column,
    /// Dates run along a row.
    Row,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Column => write!(f, "column"),
            Orientation::Row => write!(f, "row"),
        }
    }
}

/// A located date axis: a whole row or column of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub orientation: Orientation,
    pub index: usize,
}

/// How a table was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    DateAxis {
        orientation: Orientation,
        index: usize,
    },
    CalendarColumns {
        weekday_header: bool,
        resolved_columns: usize,
    },
    Unrecognized,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DateAxis { orientation, index } => {
                write!(f, "date axis ({orientation} {index})")
            }
            Strategy::CalendarColumns {
                weekday_header,
                resolved_columns,
            } => {
                write!(f, "calendar columns ({resolved_columns} resolved")?;
                if *weekday_header {
                    write!(f, ", weekday header")?;
                }
                write!(f, ")")
            }
            Strategy::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Per-table diagnostics for one parse pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOutcome {
    pub table_index: usize,
    pub rows: usize,
    pub columns: usize,
    pub strategy: Strategy,
    pub records: usize,
    /// Day numbers discarded because they fall outside the target month.
    #[serde(default)]
    pub dropped_days: usize,
}

/// Result of parsing one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedSchedule {
    pub records: Vec<ShiftRecord>,
    pub tables: Vec<TableOutcome>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
