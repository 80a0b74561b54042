// ==========================================
// BIIS Import - Importer Error Types
// ==========================================
// Taxonomy mirrors the containment levels: cell coercion
// errors are recoverable per cell, row errors per row, and
// document errors abort the import. thiserror derive macros.
// ==========================================

use crate::validator::ValidationFailure;
use thiserror::Error;

// ==========================================
// CoerceError - pure coercion failures
// ==========================================
// Raised by the coercion library without cell coordinates;
// the row processor wraps them into ImportError::Cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("unknown {field} code: '{value}'")]
    UnknownCode { field: &'static str, value: String },

    #[error("year value '{value}' does not match pattern [0-9.-]+")]
    MalformedYear { value: String },

    #[error("missing numeric value for {field}")]
    MissingNumber { field: &'static str },

    #[error("unknown ISO 4217 currency code: '{value}'")]
    UnknownCurrency { value: String },
}

// ==========================================
// ImportError
// ==========================================
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== document-level errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .xlsx)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("workbook parse failed: {0}")]
    WorkbookError(String),

    #[error("worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("no sheet selected: configuration names neither sheet-number nor sheet-name")]
    NoSheetSelected,

    #[error("missing configuration parameter: {0}")]
    MissingParameter(&'static str),

    #[error("import source already loaded; call unload() first")]
    AlreadyLoaded,

    // ===== cell-level errors =====
    #[error("cannot convert '{header}' of cell [{cell_ref}], value='{value}': {source}")]
    Cell {
        cell_ref: String,
        header: String,
        value: String,
        #[source]
        source: CoerceError,
    },

    // ===== row-level errors =====
    #[error("row {row}: cannot resolve conversion context of column '{column}'")]
    ContextUnresolved { row: usize, column: String },

    #[error("row {row}: cannot append valuation for property (IDs correct?)")]
    NoValuationAttached { row: usize },

    #[error("row {row}: cannot synthesize property label from an empty address")]
    LabelSynthesis { row: usize },

    #[error("row {row}: valuation rejected: {source}")]
    ValidationRejected {
        row: usize,
        #[source]
        source: ValidationFailure,
    },

    // ===== generic errors =====
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::WorkbookError(err.to_string())
    }
}

/// Result alias for the importer.
pub type ImportResult<T> = Result<T, ImportError>;

impl ImportError {
    /// True for errors that abort the whole import rather than a
    /// single cell or row.
    pub fn is_document_level(&self) -> bool {
        matches!(
            self,
            ImportError::FileNotFound(_)
                | ImportError::UnsupportedFormat(_)
                | ImportError::FileReadError(_)
                | ImportError::WorkbookError(_)
                | ImportError::SheetNotFound(_)
                | ImportError::NoSheetSelected
                | ImportError::MissingParameter(_)
                | ImportError::AlreadyLoaded
        )
    }
}
