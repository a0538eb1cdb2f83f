//! Row-count reconciler: after materialization, drop leftover template
//! example rows so the sheet holds exactly as many data rows as the source.

use tracing::debug;
use umya_spreadsheet::Worksheet;

/// Delete every row after `last_written_row` (1-based). Rows at or before it
/// are untouched. Returns the number of rows removed.
pub fn trim_excess_rows(sheet: &mut Worksheet, last_written_row: u32) -> u32 {
    let highest = sheet.get_highest_row();
    if highest <= last_written_row {
        return 0;
    }
    let excess = highest - last_written_row;
    sheet.remove_row(&(last_written_row + 1), &excess);
    debug!(
        sheet = sheet.get_name(),
        removed = excess,
        "trimmed leftover template rows"
    );
    excess
}
