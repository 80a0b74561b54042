// ==========================================
// BIIS Import - Configuration Layer
// ==========================================

pub mod import_config;

pub use import_config::{
    required_configuration, ImportSource, ImportWorkerConfiguration, ReadSeek,
    RequiredConfiguration, PARAMETER_NAME_SHEET_IDX, PARAMETER_NAME_SHEET_NAME,
    PARAMETER_NAME_STREAM,
};
