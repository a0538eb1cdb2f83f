//! Sheetcast - deterministic template-driven Excel generation
//!
//! Given one multi-sheet template workbook (layout, header depth, cell
//! styling) and a batch of flat source datasets, sheetcast produces one new
//! workbook per source: the template's data region is repopulated by fixed
//! positional column-mapping rules, with auto-generated row numbering, one
//! named passthrough field, per-row style cloning from the template's own
//! exemplar row, and row-count reconciliation.
//!
//! # Example
//!
//! ```no_run
//! use sheetcast::generate::Generator;
//! use sheetcast::ingest::{self, HeaderDepthPolicy};
//!
//! let template_bytes = std::fs::read("template.xlsx")?;
//! let source_bytes = std::fs::read("records.xlsx")?;
//!
//! let template = ingest::ingest_template(
//!     "template.xlsx",
//!     template_bytes,
//!     HeaderDepthPolicy::FixedByPosition,
//! )?;
//! let source = ingest::ingest_source("records.xlsx", &source_bytes)?;
//!
//! let generator = Generator::new(template);
//! let artifact = generator.generate(&source)?;
//! std::fs::write(&artifact.file_name, &artifact.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod error;
pub mod generate;
pub mod ingest;
pub mod mapping;
pub mod materialize;
pub mod reconcile;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use error::{SheetcastError, SheetcastResult};
pub use generate::Generator;
pub use ingest::HeaderDepthPolicy;
pub use types::{CellValue, GeneratedArtifact, SourceRecordSet, TemplateDocument, TemplateSheet};
