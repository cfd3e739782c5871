use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shifts worked in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    /// "YYYY-MM".
    pub period: String,
    pub count: usize,
}

/// Statistics for one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerReport {
    /// Worker token as extracted.
    pub worker: String,
    pub total: usize,
    /// Chronological monthly breakdown.
    pub monthly: Vec<MonthCount>,
    pub friday: usize,
    pub saturday: usize,
    pub sunday: usize,
    /// Friday+Saturday+Sunday share of the total, one decimal.
    pub weekend_pct: Decimal,
    /// Dates on which this worker held the day's highest position.
    pub last_position: usize,
}

impl WorkerReport {
    pub fn weekend_total(&self) -> usize {
        self.friday + self.saturday + self.sunday
    }

    /// Monthly breakdown as "2024-11: 3, 2024-12: 1".
    pub fn monthly_summary(&self) -> String {
        self.monthly
            .iter()
            .map(|m| format!("{}: {}", m.period, m.count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
