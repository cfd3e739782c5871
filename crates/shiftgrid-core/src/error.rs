use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ShiftError {
    #[error("unsupported source format: {0}. Supported: .pdf, .xlsx, .xlsm, .xls, .ods, .csv, .json")]
    UnsupportedSource(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("invalid parse options: {0}")]
    InvalidOptions(String),

    #[error("no shifts found in {0}")]
    NoShifts(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
