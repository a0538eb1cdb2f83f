//! Command implementations for the `sheetcast` binary. All batch sequencing,
//! progress reporting and error display live here; the engine itself only
//! transforms bytes.

use crate::error::SheetcastResult;
use crate::generate::Generator;
use crate::ingest::{self, HeaderDepthPolicy};
use crate::types::SourceRecordSet;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Execute the convert command: one generated workbook per source file.
pub fn convert(
    template: PathBuf,
    sources: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    sniff_headers: bool,
) -> SheetcastResult<()> {
    let policy = if sniff_headers {
        HeaderDepthPolicy::SniffContent
    } else {
        HeaderDepthPolicy::FixedByPosition
    };

    println!("{}", "📋 Sheetcast - Batch template conversion".bold().green());
    println!("   Template: {}", template.display());
    println!("   Sources:  {}", sources.len());
    println!();

    let template_bytes = fs::read(&template)?;
    let template_doc = ingest::ingest_template(&file_name_of(&template), template_bytes, policy)?;

    // Ingest every source before generating anything, so a bad file fails
    // the run up front instead of mid-batch.
    let mut record_sets: Vec<SourceRecordSet> = Vec::with_capacity(sources.len());
    for path in &sources {
        let bytes = fs::read(path)?;
        let set = ingest::ingest_source(&file_name_of(path), &bytes)?;
        println!(
            "   {} {} ({} rows)",
            "✓".green(),
            set.file_name,
            set.row_count()
        );
        record_sets.push(set);
    }
    println!();

    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)?;

    let generator = Generator::new(template_doc);
    let total = record_sets.len();
    for (i, set) in record_sets.iter().enumerate() {
        let artifact = generator.generate(set)?;
        let target = out_dir.join(&artifact.file_name);
        fs::write(&target, &artifact.bytes)?;
        println!(
            "{} [{}/{}] {}",
            "✅".green(),
            i + 1,
            total,
            target.display()
        );
    }

    println!();
    println!("{}", format!("Done: {total} file(s) generated").bold().green());
    Ok(())
}

/// Execute the inspect command: print the structural summary the template
/// ingestor produced.
pub fn inspect(template: PathBuf, sniff_headers: bool) -> SheetcastResult<()> {
    let policy = if sniff_headers {
        HeaderDepthPolicy::SniffContent
    } else {
        HeaderDepthPolicy::FixedByPosition
    };

    let bytes = fs::read(&template)?;
    let doc = ingest::ingest_template(&file_name_of(&template), bytes, policy)?;

    println!("{}", "🔍 Template structure".bold().green());
    println!("   File: {}", template.display());
    println!("   Policy: {policy:?}");
    println!();
    for (index, sheet) in doc.sheets.iter().enumerate() {
        println!(
            "   [{}] {}: {} header row(s), data starts at row {}",
            index,
            sheet.name.bright_blue(),
            sheet.header_row_count,
            sheet.first_data_row
        );
    }
    Ok(())
}
