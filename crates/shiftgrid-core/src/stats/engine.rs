use crate::model::ShiftRecord;
use crate::stats::report::{MonthCount, WorkerReport};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Aggregate a shift dataset into one report per worker, sorted by name.
///
/// Workers are grouped by exact token. An empty dataset gives an empty list.
pub fn aggregate(records: &[ShiftRecord]) -> Vec<WorkerReport> {
    let day_max = max_position_by_date(records);

    let mut by_worker: BTreeMap<&str, Vec<&ShiftRecord>> = BTreeMap::new();
    for record in records {
        by_worker.entry(record.worker.as_str()).or_default().push(record);
    }

    by_worker
        .into_iter()
        .map(|(worker, shifts)| worker_report(worker, &shifts, &day_max))
        .collect()
}

/// Highest position recorded on each date, across all workers.
/// Dates whose records carry no position are absent.
fn max_position_by_date(records: &[ShiftRecord]) -> HashMap<NaiveDate, i64> {
    let mut day_max: HashMap<NaiveDate, i64> = HashMap::new();
    for record in records {
        if let Some(pos) = record.position {
            day_max
                .entry(record.date)
                .and_modify(|m| *m = (*m).max(pos))
                .or_insert(pos);
        }
    }
    day_max
}

fn worker_report(
    worker: &str,
    shifts: &[&ShiftRecord],
    day_max: &HashMap<NaiveDate, i64>,
) -> WorkerReport {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    let (mut friday, mut saturday, mut sunday) = (0, 0, 0);
    let mut last_dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for shift in shifts {
        *months
            .entry((shift.date.year(), shift.date.month()))
            .or_default() += 1;

        match shift.date.weekday() {
            Weekday::Fri => friday += 1,
            Weekday::Sat => saturday += 1,
            Weekday::Sun => sunday += 1,
            _ => {}
        }

        if shift.position.is_some() && shift.position == day_max.get(&shift.date).copied() {
            last_dates.insert(shift.date);
        }
    }

    let total = shifts.len();
    WorkerReport {
        worker: worker.to_string(),
        total,
        monthly: months
            .into_iter()
            .map(|((year, month), count)| MonthCount {
                period: format!("{year:04}-{month:02}"),
                count,
            })
            .collect(),
        friday,
        saturday,
        sunday,
        weekend_pct: weekend_percentage(friday + saturday + sunday, total),
        last_position: last_dates.len(),
    }
}

/// Weekend share in percent, one decimal place; 0.0 when there are no shifts.
pub fn weekend_percentage(weekend: usize, total: usize) -> Decimal {
    let mut pct = if total == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(weekend) * Decimal::ONE_HUNDRED / Decimal::from(total))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    };
    pct.rescale(1);
    pct
}
