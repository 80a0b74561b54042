// ==========================================
// BIIS Import - Core Library
// ==========================================
// Imports BIIS spreadsheet exports (xlsx) into the GIF
// valuation container model. Rows referencing the same
// business object id merge into one property; every data row
// assembles one valuation.
// ==========================================

// ==========================================
// module declarations
// ==========================================

// domain layer - target entities and value types
pub mod domain;

// importer layer - the row transformation engine
pub mod importer;

// configuration layer - worker parameters
pub mod config;

// validator boundary - format-subset checks
pub mod validator;

// log system
pub mod logging;

// ==========================================
// core re-exports
// ==========================================

pub use config::{ImportSource, ImportWorkerConfiguration, RequiredConfiguration};
pub use domain::{Address, Container, Property, Subset, Valuation};
pub use importer::{
    BiisReader, ImportError, ImportResult, ImportSummary, SheetImporter, SUPPORTED_SUBSETS,
};
pub use validator::{Subset57Validator, ValidationFailure, ValuationValidator};

// ==========================================
// constants
// ==========================================

// crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// component name
pub const APP_NAME: &str = "biis-import";
