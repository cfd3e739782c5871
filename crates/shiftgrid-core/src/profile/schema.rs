use serde::{Deserialize, Serialize};

/// Weekday names and abbreviations recognized when no profile is given.
/// Spanish and English, lowercase.
pub const DEFAULT_WEEKDAY_NAMES: &[&str] = &[
    "lunes",
    "martes",
    "miércoles",
    "miercoles",
    "jueves",
    "viernes",
    "sábado",
    "sabado",
    "domingo",
    "lun",
    "mar",
    "mié",
    "mie",
    "jue",
    "vie",
    "sáb",
    "sab",
    "dom",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "mon",
    "tue",
    "wed",
    "thu",
    "fri",
    "sat",
    "sun",
];

/// Calendar labels that are never worker names.
pub const DEFAULT_SKIP_WORDS: &[&str] = &["día", "dia", "day"];

/// chrono format strings tried, in order, when a cell might be a date.
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Locale and heuristic settings for one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Lowercase weekday names and abbreviations.
    pub weekday_names: Vec<String>,
    #[serde(default)]
    pub skip_words: Vec<String>,
    pub date_formats: Vec<String>,
    /// Distinct dates a row or column needs before it counts as a date axis.
    #[serde(default = "default_min_axis_dates")]
    pub min_axis_dates: usize,
    /// How many leading columns (then rows) are tried as a date axis.
    #[serde(default = "default_axis_scan_depth")]
    pub axis_scan_depth: usize,
    /// Day-number lines needed for a headerless table to count as a calendar.
    #[serde(default = "default_calendar_min_day_markers")]
    pub calendar_min_day_markers: usize,
}

fn default_min_axis_dates() -> usize {
    6
}

fn default_axis_scan_depth() -> usize {
    5
}

fn default_calendar_min_day_markers() -> usize {
    5
}

impl Default for Profile {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Profile {
            name: "default".into(),
            description: Some("Spanish and English weekday names, ISO and day-first dates".into()),
            weekday_names: owned(DEFAULT_WEEKDAY_NAMES),
            skip_words: owned(DEFAULT_SKIP_WORDS),
            date_formats: owned(DEFAULT_DATE_FORMATS),
            min_axis_dates: default_min_axis_dates(),
            axis_scan_depth: default_axis_scan_depth(),
            calendar_min_day_markers: default_calendar_min_day_markers(),
        }
    }
}

impl Profile {
    /// Case-insensitive weekday-name check on a trimmed token.
    pub fn is_weekday_name(&self, token: &str) -> bool {
        let lower = token.trim().to_lowercase();
        self.weekday_names.iter().any(|w| *w == lower)
    }

    /// Weekday name or calendar label such as "día".
    pub fn is_calendar_label(&self, token: &str) -> bool {
        if self.is_weekday_name(token) {
            return true;
        }
        let lower = token.trim().to_lowercase();
        self.skip_words.iter().any(|w| *w == lower)
    }
}
