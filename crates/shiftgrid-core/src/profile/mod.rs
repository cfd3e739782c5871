pub mod builtin;
pub mod schema;

use crate::error::ShiftError;
use chrono::format::{Item, StrftimeItems};
use schema::Profile;
use std::path::Path;

/// Load a profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<Profile, ShiftError> {
    let content = std::fs::read_to_string(path).map_err(|e| ShiftError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<Profile, ShiftError> {
    let profile: Profile = serde_json::from_str(json).map_err(|e| ShiftError::ProfileLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    finish(profile)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<Profile, ShiftError> {
    let profile: Profile = serde_json::from_str(json).map_err(ShiftError::Json)?;
    finish(profile)
}

fn finish(mut profile: Profile) -> Result<Profile, ShiftError> {
    // Names are compared case-folded.
    for word in profile
        .weekday_names
        .iter_mut()
        .chain(profile.skip_words.iter_mut())
    {
        *word = word.trim().to_lowercase();
    }
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is usable by the extraction heuristics.
pub fn validate_profile(profile: &Profile) -> Result<(), ShiftError> {
    if profile.name.trim().is_empty() {
        return Err(ShiftError::ProfileInvalid("name must not be empty".into()));
    }

    if profile.weekday_names.is_empty() {
        return Err(ShiftError::ProfileInvalid(
            "weekday_names must not be empty".into(),
        ));
    }

    if let Some(blank) = profile
        .weekday_names
        .iter()
        .chain(profile.skip_words.iter())
        .find(|w| w.trim().is_empty())
    {
        return Err(ShiftError::ProfileInvalid(format!(
            "blank entry '{blank}' in weekday_names or skip_words"
        )));
    }

    if profile.date_formats.is_empty() {
        return Err(ShiftError::ProfileInvalid(
            "date_formats must not be empty".into(),
        ));
    }

    for fmt in &profile.date_formats {
        if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
            return Err(ShiftError::ProfileInvalid(format!(
                "invalid date format '{fmt}'"
            )));
        }
    }

    if profile.min_axis_dates == 0 {
        return Err(ShiftError::ProfileInvalid(
            "min_axis_dates must be at least 1".into(),
        ));
    }

    if profile.axis_scan_depth == 0 {
        return Err(ShiftError::ProfileInvalid(
            "axis_scan_depth must be at least 1".into(),
        ));
    }

    if profile.calendar_min_day_markers == 0 {
        return Err(ShiftError::ProfileInvalid(
            "calendar_min_day_markers must be at least 1".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_profile() {
        let json = r#"{
            "name": "de",
            "weekday_names": ["Montag", "Mo", "Dienstag"],
            "date_formats": ["%d.%m.%Y"]
        }"#;
        let p = parse_profile_str(json).unwrap();
        assert_eq!(p.name, "de");
        assert_eq!(p.weekday_names, vec!["montag", "mo", "dienstag"]);
        assert_eq!(p.min_axis_dates, 6);
        assert_eq!(p.axis_scan_depth, 5);
        assert!(p.skip_words.is_empty());
    }

    #[test]
    fn test_empty_weekday_names_rejected() {
        let json = r#"{ "name": "x", "weekday_names": [], "date_formats": ["%Y-%m-%d"] }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_empty_date_formats_rejected() {
        let json = r#"{ "name": "x", "weekday_names": ["mon"], "date_formats": [] }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let json = r#"{ "name": "x", "weekday_names": ["mon"], "date_formats": ["%Q-%m"] }"#;
        assert!(matches!(
            parse_profile_str(json),
            Err(ShiftError::ProfileInvalid(_))
        ));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let json = r#"{
            "name": "x",
            "weekday_names": ["mon"],
            "date_formats": ["%Y-%m-%d"],
            "min_axis_dates": 0
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_default_profile_is_valid() {
        assert!(validate_profile(&Profile::default()).is_ok());
    }
}
