//! Document assembler: per source file, reload the template from its
//! pristine bytes, run materialization, style propagation and row-count
//! reconciliation over the mapped sheets, then serialize the result.

use crate::error::{SheetcastError, SheetcastResult};
use crate::mapping::{blocks_for_sheet, MAPPED_SHEET_COUNT, PASSTHROUGH_HEADER};
use crate::materialize::materialize_row;
use crate::reconcile::trim_excess_rows;
use crate::style::RowStyleSnapshot;
use crate::types::{GeneratedArtifact, SourceRecordSet, TemplateDocument};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Fixed prefix of every generated file name ("conversion result").
pub const OUTPUT_PREFIX: &str = "转换结果_";

/// Output name convention: prefix + source base name, extension replaced by
/// `.xlsx`.
pub fn output_file_name(source_name: &str) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_name.to_string());
    format!("{OUTPUT_PREFIX}{stem}.xlsx")
}

/// Generates one artifact per source record set from a single template.
///
/// The template's live workbook representation is recreated fresh for every
/// source file and discarded after serialization, so no file's output can
/// observe another file's mutations.
pub struct Generator {
    template: TemplateDocument,
}

impl Generator {
    pub fn new(template: TemplateDocument) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &TemplateDocument {
        &self.template
    }

    /// Generate the artifact for one source record set.
    pub fn generate(&self, source: &SourceRecordSet) -> SheetcastResult<GeneratedArtifact> {
        let fail = |message: String| SheetcastError::GenerationFailed {
            file: source.file_name.clone(),
            message,
        };

        let mut book =
            umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(&self.template.bytes), true)
                .map_err(|e| fail(format!("template reload: {e}")))?;

        let passthrough_index = source.header_position(PASSTHROUGH_HEADER);

        for sheet_index in 0..MAPPED_SHEET_COUNT {
            // A sheet the template does not have is simply not processed.
            let Some(descriptor) = self.template.sheets.get(sheet_index) else {
                break;
            };
            let Some(sheet) = book.get_sheet_mut(&sheet_index) else {
                break;
            };

            let first_data_row = descriptor.first_data_row;
            let blocks = blocks_for_sheet(sheet_index);

            // Exemplar styles come from the template's own first data row,
            // before anything is written over it.
            let snapshot = RowStyleSnapshot::capture(sheet, first_data_row);

            for (idx, source_row) in source.rows.iter().enumerate() {
                let row = first_data_row + idx as u32;
                materialize_row(sheet, source_row, idx, row, passthrough_index, blocks);
                snapshot.apply(sheet, row);
            }

            let last_written_row =
                first_data_row + source.rows.len() as u32 - 1;
            trim_excess_rows(sheet, last_written_row);

            debug!(
                sheet = descriptor.name.as_str(),
                rows = source.rows.len(),
                first_data_row,
                "sheet materialized"
            );
        }

        let mut cursor = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&book, &mut cursor)
            .map_err(|e| fail(format!("serialization: {e}")))?;

        let artifact = GeneratedArtifact {
            file_name: output_file_name(&source.file_name),
            bytes: cursor.into_inner(),
        };
        info!(
            source = source.file_name.as_str(),
            output = artifact.file_name.as_str(),
            rows = source.rows.len(),
            "generated artifact"
        );
        Ok(artifact)
    }

    /// Generate artifacts for a batch, strictly sequentially and in
    /// submission order. The first failure aborts the remaining batch: a
    /// partially processed run is not safe to continue from.
    pub fn generate_batch(
        &self,
        sources: &[SourceRecordSet],
    ) -> SheetcastResult<Vec<GeneratedArtifact>> {
        let mut artifacts = Vec::with_capacity(sources.len());
        for source in sources {
            artifacts.push(self.generate(source)?);
        }
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name_strips_extension() {
        assert_eq!(output_file_name("九月名单.xlsx"), "转换结果_九月名单.xlsx");
        assert_eq!(output_file_name("report.csv"), "转换结果_report.xlsx");
    }

    #[test]
    fn test_output_file_name_keeps_inner_dots() {
        assert_eq!(
            output_file_name("batch.v2.final.xlsx"),
            "转换结果_batch.v2.final.xlsx"
        );
    }

    #[test]
    fn test_output_file_name_without_extension() {
        assert_eq!(output_file_name("plain"), "转换结果_plain.xlsx");
    }
}
