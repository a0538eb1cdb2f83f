//! Core data model: source record sets, template descriptors, generated
//! artifacts.

/// A single cell value flowing from a source workbook into a target workbook.
///
/// This is the crate's own representation so that reading (calamine) and
/// writing (umya-spreadsheet) stay decoupled.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// One flat tabular dataset: the trimmed header row of a source file plus its
/// data rows. Immutable once built by the ingestor.
#[derive(Debug, Clone)]
pub struct SourceRecordSet {
    /// Name of the file this set was ingested from (used for error reporting
    /// and output naming).
    pub file_name: String,
    /// First row of the first worksheet, coerced to trimmed strings.
    pub headers: Vec<String>,
    /// Data rows in worksheet order. Fully empty rows are dropped during
    /// ingestion, so every row here has at least one non-empty cell.
    pub rows: Vec<Vec<CellValue>>,
}

impl SourceRecordSet {
    /// Position of the first header equal to `name` after trimming, if any.
    pub fn header_position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers.iter().position(|h| h.trim() == wanted)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Structural summary of one template worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSheet {
    pub name: String,
    /// Number of leading rows reserved for headers before data begins.
    pub header_row_count: u32,
    /// 1-based row index of the first data row (`header_row_count + 1`).
    pub first_data_row: u32,
}

/// The parsed template: per-sheet structure plus the pristine workbook bytes.
///
/// The bytes are never mutated. Every generation run reloads a fresh live
/// workbook from them, so processing file N cannot see residue from file N-1.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    pub file_name: String,
    pub sheets: Vec<TemplateSheet>,
    pub bytes: Vec<u8>,
}

impl TemplateDocument {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// One generated output: serialized workbook bytes plus the suggested name.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
