use thiserror::Error;

pub type SheetcastResult<T> = Result<T, SheetcastError>;

/// Engine errors. Every variant names the file it originated from so a batch
/// caller can report which input failed.
#[derive(Error, Debug)]
pub enum SheetcastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{file}: not a valid workbook: {message}")]
    CorruptWorkbook { file: String, message: String },

    #[error("{file}: source has a header row but no data rows")]
    EmptySource { file: String },

    #[error("{file}: unsupported template structure: {message}")]
    TemplateStructureUnsupported { file: String, message: String },

    #[error("{file}: generation failed: {message}")]
    GenerationFailed { file: String, message: String },
}

impl SheetcastError {
    /// The name of the input file this error originated from, if any.
    pub fn file(&self) -> Option<&str> {
        match self {
            SheetcastError::Io(_) => None,
            SheetcastError::CorruptWorkbook { file, .. }
            | SheetcastError::EmptySource { file }
            | SheetcastError::TemplateStructureUnsupported { file, .. }
            | SheetcastError::GenerationFailed { file, .. } => Some(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_file_identity() {
        let err = SheetcastError::EmptySource {
            file: "orders.xlsx".to_string(),
        };
        assert!(err.to_string().contains("orders.xlsx"));
        assert_eq!(err.file(), Some("orders.xlsx"));
    }

    #[test]
    fn test_io_error_has_no_file() {
        let err = SheetcastError::Io(std::io::Error::other("boom"));
        assert_eq!(err.file(), None);
    }
}
