//! Tabular ingestor: parses raw workbook bytes into either a flat
//! [`SourceRecordSet`] (source files) or a per-sheet structural summary
//! (template files).

use crate::error::{SheetcastError, SheetcastResult};
use crate::types::{CellValue, SourceRecordSet, TemplateDocument, TemplateSheet};
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;
use tracing::debug;

/// How many leading rows the content sniffer will inspect at most.
const SNIFF_ROW_CAP: usize = 3;

/// How the per-sheet header depth of a template is determined.
///
/// Two competing policies exist in the observed system. They are kept as an
/// explicit strategy so callers choose one deliberately instead of the
/// implementation silently merging them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderDepthPolicy {
    /// The first two worksheets (by position) have a 2-row header; every
    /// later sheet has a 1-row header. This is the policy the shipped batch
    /// pipeline uses, hence the default.
    #[default]
    FixedByPosition,
    /// Inspect up to the first three rows and count a row as part of the
    /// header block only while at least one of its cells is non-empty,
    /// capping the depth at three.
    SniffContent,
}

fn corrupt(file: &str, message: impl ToString) -> SheetcastError {
    SheetcastError::CorruptWorkbook {
        file: file.to_string(),
        message: message.to_string(),
    }
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

fn row_is_empty(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

/// Parse a source file: first worksheet only, row 1 is the header row, every
/// later non-empty row is a data row.
pub fn ingest_source(file_name: &str, bytes: &[u8]) -> SheetcastResult<SourceRecordSet> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| corrupt(file_name, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetcastError::EmptySource {
            file: file_name.to_string(),
        })?
        .map_err(|e| corrupt(file_name, e))?;

    if range.is_empty() {
        return Err(SheetcastError::EmptySource {
            file: file_name.to_string(),
        });
    }

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .map(|row| row.iter().map(|c| c.to_string().trim().to_string()).collect())
        .unwrap_or_default();

    let rows: Vec<Vec<CellValue>> = rows_iter
        .filter(|row| !row_is_empty(row))
        .map(|row| row.iter().map(to_cell_value).collect())
        .collect();

    if rows.is_empty() {
        return Err(SheetcastError::EmptySource {
            file: file_name.to_string(),
        });
    }

    debug!(
        file = file_name,
        headers = headers.len(),
        rows = rows.len(),
        "ingested source record set"
    );

    Ok(SourceRecordSet {
        file_name: file_name.to_string(),
        headers,
        rows,
    })
}

/// Parse a template file: enumerate every worksheet and determine its header
/// depth according to `policy`. The pristine bytes are retained on the
/// returned document; they are the only thing generation ever reloads from.
pub fn ingest_template(
    file_name: &str,
    bytes: Vec<u8>,
    policy: HeaderDepthPolicy,
) -> SheetcastResult<TemplateDocument> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(&bytes)).map_err(|e| corrupt(file_name, e))?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(SheetcastError::TemplateStructureUnsupported {
            file: file_name.to_string(),
            message: "workbook has no worksheets".to_string(),
        });
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for (index, name) in sheet_names.iter().enumerate() {
        let header_row_count = match policy {
            HeaderDepthPolicy::FixedByPosition => {
                if index < 2 {
                    2
                } else {
                    1
                }
            }
            HeaderDepthPolicy::SniffContent => {
                let range = workbook
                    .worksheet_range(name)
                    .map_err(|e| corrupt(file_name, e))?;
                sniff_header_depth(&range)
            }
        };

        debug!(
            file = file_name,
            sheet = name.as_str(),
            header_rows = header_row_count,
            "inferred template sheet structure"
        );

        sheets.push(TemplateSheet {
            name: name.clone(),
            header_row_count,
            first_data_row: header_row_count + 1,
        });
    }

    Ok(TemplateDocument {
        file_name: file_name.to_string(),
        sheets,
        bytes,
    })
}

/// Count leading non-empty rows among the first [`SNIFF_ROW_CAP`] sheet rows.
fn sniff_header_depth(range: &Range<Data>) -> u32 {
    // A range whose bounding box starts below row 1 means the sheet's top
    // rows are entirely empty, which ends the header block immediately.
    match range.start() {
        None => 0,
        Some((start_row, _)) if start_row > 0 => 0,
        Some(_) => range
            .rows()
            .take(SNIFF_ROW_CAP)
            .take_while(|row| !row_is_empty(row))
            .count() as u32,
    }
}
