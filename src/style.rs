//! Style propagation: capture the exemplar row's per-column styles once per
//! sheet, reapply them to every materialized row.

use tracing::warn;
use umya_spreadsheet::{Style, Worksheet};

/// A per-column style snapshot of one exemplar row.
///
/// Captured once per sheet before any data is written, applied after each
/// materialized row, then discarded with the generation run.
#[derive(Debug, Clone, Default)]
pub struct RowStyleSnapshot {
    styles: Vec<(u32, Style)>,
}

impl RowStyleSnapshot {
    /// Capture the styles of `row` (1-based). If the sheet has fewer rows
    /// than `row` there is no exemplar to copy from; the snapshot is empty
    /// and newly written rows keep the document's default styling.
    pub fn capture(sheet: &Worksheet, row: u32) -> Self {
        if row == 0 || row > sheet.get_highest_row() {
            warn!(
                sheet = sheet.get_name(),
                row, "no exemplar row to capture styles from"
            );
            return Self::default();
        }

        let highest_column = sheet.get_highest_column();
        let mut styles = Vec::new();
        for col in 1..=highest_column {
            if let Some(cell) = sheet.get_cell((col, row)) {
                styles.push((col, cell.get_style().clone()));
            }
        }
        Self { styles }
    }

    /// Reapply the snapshot to `row`, including columns whose value is blank,
    /// so borders and fonts persist where the mapped value is null.
    pub fn apply(&self, sheet: &mut Worksheet, row: u32) {
        for (col, style) in &self.styles {
            sheet.get_cell_mut((*col, row)).set_style(style.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold_style() -> Style {
        let mut style = Style::default();
        style.get_font_mut().set_bold(true);
        style
    }

    #[test]
    fn test_capture_and_apply_round_trip() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut((1, 3)).set_value("exemplar");
        sheet.get_cell_mut((1, 3)).set_style(bold_style());
        sheet.get_cell_mut((2, 3)).set_value("plain");

        let snapshot = RowStyleSnapshot::capture(sheet, 3);
        assert_eq!(snapshot.len(), 2);

        snapshot.apply(sheet, 7);
        let applied = book.get_sheet(&0).unwrap().get_cell((1, 7)).unwrap();
        let font = applied.get_style().get_font().unwrap();
        assert!(*font.get_bold());
    }

    #[test]
    fn test_capture_beyond_sheet_extent_is_empty() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut((1, 1)).set_value("only row");

        let snapshot = RowStyleSnapshot::capture(sheet, 5);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_apply_empty_snapshot_is_a_no_op() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        let snapshot = RowStyleSnapshot::default();
        snapshot.apply(sheet, 2);
        assert_eq!(sheet.get_highest_row(), 0);
    }
}
