//! Row materializer: writes one output row per source row according to the
//! mapping table, clearing residual template values first.

use crate::mapping::{BlockRule, CLEAR_COLUMN_FLOOR, PASSTHROUGH_COLUMN, SEQUENCE_COLUMN};
use crate::types::CellValue;
use umya_spreadsheet::Worksheet;

static BLANK: CellValue = CellValue::Empty;

/// Source value at `idx`, blank when the row is shorter than the mapping
/// expects. Out-of-range reads are tolerated, not fatal.
fn value_at(row: &[CellValue], idx: usize) -> &CellValue {
    row.get(idx).unwrap_or(&BLANK)
}

fn write_cell(sheet: &mut Worksheet, col: u32, row: u32, value: &CellValue) {
    match value {
        // The row was pre-cleared; nothing to write.
        CellValue::Empty => {}
        CellValue::Text(s) => {
            sheet.get_cell_mut((col, row)).set_value_string(s);
        }
        CellValue::Number(n) => {
            sheet.get_cell_mut((col, row)).set_value_number(*n);
        }
        CellValue::Bool(b) => {
            sheet.get_cell_mut((col, row)).set_value_bool(*b);
        }
    }
}

/// Clear columns 2..=max(highest column, floor) of `row`. Column 1 is not
/// cleared because the sequence rule always overwrites it.
fn clear_row(sheet: &mut Worksheet, row: u32) {
    let max_col = sheet.get_highest_column().max(CLEAR_COLUMN_FLOOR);
    for col in PASSTHROUGH_COLUMN..=max_col {
        sheet.get_cell_mut((col, row)).set_value_string("");
    }
}

/// Materialize source row `idx` (0-based) into worksheet row `row` (1-based):
/// residual clear, sequence number, passthrough field, then every block rule
/// for this sheet.
pub fn materialize_row(
    sheet: &mut Worksheet,
    source_row: &[CellValue],
    idx: usize,
    row: u32,
    passthrough_index: Option<usize>,
    blocks: &[BlockRule],
) {
    clear_row(sheet, row);

    // Sequence is always regenerated; original template numbering is ignored.
    sheet
        .get_cell_mut((SEQUENCE_COLUMN, row))
        .set_value_number(idx as u32 + 1);

    if let Some(p) = passthrough_index {
        write_cell(sheet, PASSTHROUGH_COLUMN, row, value_at(source_row, p));
    }

    for block in blocks {
        for offset in 0..block.width {
            write_cell(
                sheet,
                block.target_start + offset as u32,
                row,
                value_at(source_row, block.source_start + offset),
            );
        }
    }
}
