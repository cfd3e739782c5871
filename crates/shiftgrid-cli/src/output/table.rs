use shiftgrid_core::model::{ParsedSchedule, Table};
use shiftgrid_core::sniff::CalendarStructure;
use shiftgrid_core::stats::WorkerReport;
use shiftgrid_core::ParseOptions;

const INSPECT_ROWS: usize = 10;
const INSPECT_COLUMNS: usize = 5;
const INSPECT_CELL_WIDTH: usize = 18;

/// Human-readable summary of a parse: per-table strategy, then the records.
pub fn format_parsed(parsed: &ParsedSchedule) -> String {
    let mut out = String::new();

    for t in &parsed.tables {
        out.push_str(&format!(
            "Table {} ({}x{}): {} -> {} shift(s)\n",
            t.table_index + 1,
            t.rows,
            t.columns,
            t.strategy,
            t.records
        ));
    }
    for w in &parsed.warnings {
        out.push_str(&format!("  warning: {w}\n"));
    }
    out.push('\n');

    if parsed.records.is_empty() {
        out.push_str("No shifts found.");
        return out;
    }

    let width = parsed
        .records
        .iter()
        .map(|r| r.worker.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    out.push_str(&format!("  {:<10}  {:<width$}  {:>8}\n", "Date", "Worker", "Position"));
    out.push_str(&format!("  {}\n", "-".repeat(10 + 2 + width + 2 + 8)));
    for r in &parsed.records {
        let position = r.position.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
        out.push_str(&format!(
            "  {:<10}  {:<width$}  {:>8}\n",
            r.date.format("%Y-%m-%d").to_string(),
            r.worker,
            position
        ));
    }
    out.push_str(&format!("\n{} shift(s)", parsed.records.len()));
    out
}

/// Console table of per-worker statistics.
pub fn format_reports(reports: &[WorkerReport]) -> String {
    let width = reports
        .iter()
        .map(|r| r.worker.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let rule = "=".repeat(width + 62);
    let mut out = format!("{rule}\nSHIFT ANALYSIS RESULTS\n{rule}\n");
    out.push_str(&format!(
        "{:<width$}  {:>5}  {:>7}  {:>6}  {:>7}  {:>8}  {:>13}\n",
        "Worker", "Total", "Viernes", "Sábado", "Domingo", "Weekend%", "Last position"
    ));
    out.push_str(&format!("{}\n", "-".repeat(width + 62)));

    for r in reports {
        out.push_str(&format!(
            "{:<width$}  {:>5}  {:>7}  {:>6}  {:>7}  {:>8}  {:>13}\n",
            r.worker,
            r.total,
            r.friday,
            r.saturday,
            r.sunday,
            r.weekend_pct.to_string(),
            r.last_position
        ));
        out.push_str(&format!("{:<width$}  {}\n", "", r.monthly_summary()));
    }
    out.push_str(&rule);
    out
}

/// Explain an empty result on stderr.
pub fn print_empty_warning(parsed: &ParsedSchedule, options: &ParseOptions) {
    let rule = "=".repeat(60);
    eprintln!("{rule}");
    eprintln!("WARNING: no shifts found in the file");
    eprintln!("{rule}");
    if parsed.tables.is_empty() {
        eprintln!("\nNo tables could be read from the document.");
    } else {
        eprintln!();
        for t in &parsed.tables {
            eprintln!(
                "  table {} ({}x{}): {}",
                t.table_index + 1,
                t.rows,
                t.columns,
                t.strategy
            );
        }
    }
    eprintln!("\nLikely causes:");
    eprintln!("  1. The file does not contain a shift calendar");
    eprintln!("  2. The calendar layout is not recognized");
    eprintln!("  3. Dates or worker names use an unusual format");
    let months: Vec<String> = options.months.iter().map(|m| m.to_string()).collect();
    eprintln!(
        "  4. Day-number calendars were read for year {}, month(s) {} (see --year, --months)",
        options.year,
        months.join(",")
    );
    eprintln!("\nSuggestions:");
    eprintln!("  - Make sure dates run along a row or column, or columns carry day numbers");
    eprintln!("  - Worker names must sit in the cells next to their dates");
    eprintln!("  - Run `shiftgrid inspect <FILE>` to see the tables as read");
    eprintln!("  - Try another locale profile with --profile");
    eprintln!("{rule}");
}

pub fn print_structure(s: &CalendarStructure) {
    println!("Day markers on first line: {}", s.day_marker_count);
    println!("Lines per week (estimate): {}", s.lines_per_week_estimate);
    println!("Format guess:              {}", s.format_guess);
}

/// Dimensions and the top-left corner of each table.
pub fn print_tables(tables: &[Table]) {
    for (i, table) in tables.iter().enumerate() {
        println!(
            "--- Table {} ({} rows x {} columns) ---",
            i + 1,
            table.row_count(),
            table.column_count()
        );
        for (r, row) in table.rows.iter().take(INSPECT_ROWS).enumerate() {
            let cells: Vec<String> = row
                .iter()
                .take(INSPECT_COLUMNS)
                .map(|c| clip(&c.replace('\n', " / "), INSPECT_CELL_WIDTH))
                .map(|c| format!("{c:<width$}", width = INSPECT_CELL_WIDTH))
                .collect();
            println!("{r:>3} | {}", cells.join(" | "));
        }
        if table.row_count() > INSPECT_ROWS {
            println!("    ... {} more row(s)", table.row_count() - INSPECT_ROWS);
        }
        println!();
    }
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut clipped: String = s.chars().take(max - 1).collect();
        clipped.push('…');
        clipped
    }
}
