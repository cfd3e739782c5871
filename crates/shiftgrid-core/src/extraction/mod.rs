pub mod delimited;
pub mod layout;
pub mod pdftotext;
pub mod spreadsheet;

use crate::error::ShiftError;
use crate::model::Table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Kind of document a grid was read from. Decides the strategy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Pdf,
    Spreadsheet,
    Csv,
    JsonGrid,
}

impl SourceKind {
    /// Pick the source kind from a file extension.
    pub fn from_path(path: &Path) -> Result<SourceKind, ShiftError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(SourceKind::Pdf),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceKind::Spreadsheet),
            "csv" => Ok(SourceKind::Csv),
            "json" => Ok(SourceKind::JsonGrid),
            "" => Err(ShiftError::UnsupportedSource(format!(
                "'{}' has no file extension",
                path.display()
            ))),
            other => Err(ShiftError::UnsupportedSource(format!(".{other}"))),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Pdf => write!(f, "pdf"),
            SourceKind::Spreadsheet => write!(f, "spreadsheet"),
            SourceKind::Csv => write!(f, "csv"),
            SourceKind::JsonGrid => write!(f, "json grid"),
        }
    }
}

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract layout-preserving text from PDF bytes, one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ShiftError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;

    /// Extract pages and cut them into tables.
    fn extract_tables(&self, pdf_bytes: &[u8]) -> Result<Vec<Table>, ShiftError> {
        let pages = self.extract_pages(pdf_bytes)?;
        Ok(layout::tables_from_pages(&pages))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GridFile {
    Many(Vec<Table>),
    One(Table),
}

/// Read a pre-extracted grid file: either one table (`[["a", "b"], ...]`)
/// or a list of tables (`[[["a"]], [["b"]]]`).
pub fn tables_from_json(bytes: &[u8]) -> Result<Vec<Table>, ShiftError> {
    let grid: GridFile = serde_json::from_slice(bytes)?;
    Ok(match grid {
        GridFile::Many(tables) => tables,
        GridFile::One(table) => vec![table],
    })
}
