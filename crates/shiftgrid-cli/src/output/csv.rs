use shiftgrid_core::error::ShiftError;
use shiftgrid_core::model::ShiftRecord;
use shiftgrid_core::stats::WorkerReport;

const REPORT_HEADER: [&str; 7] = [
    "Worker",
    "Total",
    "Viernes",
    "Sábado",
    "Domingo",
    "WeekendPct",
    "LastPosition",
];

/// Worker statistics, one row per worker.
pub fn reports(reports: &[WorkerReport]) -> Result<String, ShiftError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(REPORT_HEADER)?;
    for r in reports {
        writer.write_record([
            r.worker.clone(),
            r.total.to_string(),
            r.friday.to_string(),
            r.saturday.to_string(),
            r.sunday.to_string(),
            r.weekend_pct.to_string(),
            r.last_position.to_string(),
        ])?;
    }
    finish(writer)
}

/// Raw shift records as `worker,date,position`.
pub fn records(records: &[ShiftRecord]) -> Result<String, ShiftError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["worker", "date", "position"])?;
    for r in records {
        writer.write_record([
            r.worker.clone(),
            r.date.format("%Y-%m-%d").to_string(),
            r.position.map(|p| p.to_string()).unwrap_or_default(),
        ])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ShiftError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ShiftError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
}
