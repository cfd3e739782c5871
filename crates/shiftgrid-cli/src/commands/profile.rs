use shiftgrid_core::error::ShiftError;
use shiftgrid_core::profile::builtin;
use std::path::Path;

pub fn list() -> Result<(), ShiftError> {
    println!("Available predefined profiles:\n");
    for name in builtin::PRESETS {
        let profile = builtin::load_preset(name)?;
        println!(
            "  {:<8} {} weekday names, {} date formats",
            name,
            profile.weekday_names.len(),
            profile.date_formats.len()
        );
        if let Some(ref desc) = profile.description {
            println!("           {desc}");
        }
        println!();
    }
    Ok(())
}

pub fn show(name: &str) -> Result<(), ShiftError> {
    let profile = builtin::load_preset(name)?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ShiftError> {
    let profile = shiftgrid_core::profile::load_profile(file)?;

    println!("Profile '{}' is valid.", profile.name);
    println!("  Weekday names: {}", profile.weekday_names.join(", "));
    if !profile.skip_words.is_empty() {
        println!("  Skip words: {}", profile.skip_words.join(", "));
    }
    println!("  Date formats: {}", profile.date_formats.join("  "));
    println!(
        "  Thresholds: axis >= {} dates in first {} rows/columns, calendar >= {} day markers",
        profile.min_axis_dates, profile.axis_scan_depth, profile.calendar_min_day_markers
    );

    // Fewer than seven names cannot cover a week header.
    if profile.weekday_names.len() < 7 {
        println!(
            "\nWarning: only {} weekday names; headers using other names will not be detected",
            profile.weekday_names.len()
        );
    }

    Ok(())
}
