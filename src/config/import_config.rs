// ==========================================
// BIIS Import - Worker Configuration
// ==========================================
// Named parameters the host hands to the import worker: the
// input stream plus the two sheet-selection parameters. No
// loading logic lives here; the host owns where values come
// from.
// ==========================================

use std::fmt;
use std::io::{Read, Seek};
use std::path::PathBuf;

/// Parameter name of the input stream.
pub const PARAMETER_NAME_STREAM: &str = "biis-file";
/// Parameter name of the 1-based sheet index.
pub const PARAMETER_NAME_SHEET_IDX: &str = "sheet-number";
/// Parameter name of the sheet name.
pub const PARAMETER_NAME_SHEET_NAME: &str = "sheet-name";

// ==========================================
// ImportSource - the scoped input resource
// ==========================================
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

pub enum ImportSource {
    Path(PathBuf),
    Stream(Box<dyn ReadSeek>),
}

impl fmt::Debug for ImportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            ImportSource::Stream(_) => f.debug_tuple("Stream").finish(),
        }
    }
}

// ==========================================
// ImportWorkerConfiguration
// ==========================================
// Sheet selection: the 1-based index takes precedence over the
// name when both are given.
#[derive(Debug, Default)]
pub struct ImportWorkerConfiguration {
    pub source: Option<ImportSource>,
    pub sheet_number: Option<usize>,
    pub sheet_name: Option<String>,
}

impl ImportWorkerConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(ImportSource::Path(path.into())),
            ..Self::default()
        }
    }

    pub fn from_stream(stream: Box<dyn ReadSeek>) -> Self {
        Self {
            source: Some(ImportSource::Stream(stream)),
            ..Self::default()
        }
    }

    pub fn with_sheet_number(mut self, number: usize) -> Self {
        self.sheet_number = Some(number);
        self
    }

    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }
}

// ==========================================
// RequiredConfiguration - capability descriptor
// ==========================================
// Advertised so a host can validate its configuration before
// invoking the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredConfiguration {
    pub streams: &'static [&'static str],
    pub strings: &'static [&'static str],
    pub integers: &'static [&'static str],
}

pub fn required_configuration() -> RequiredConfiguration {
    RequiredConfiguration {
        streams: &[PARAMETER_NAME_STREAM],
        strings: &[PARAMETER_NAME_SHEET_NAME],
        integers: &[PARAMETER_NAME_SHEET_IDX],
    }
}
