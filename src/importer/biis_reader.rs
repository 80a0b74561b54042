// ==========================================
// BIIS Import - Import Worker / Orchestrator
// ==========================================
// Worker surface: capability metadata, load / container /
// unload lifecycle. load() acquires the input resource, opens
// the workbook, selects the sheet and runs the sheet import.
// Only document-level problems surface as errors; row and cell
// problems are contained below and visible in the logs.
// ==========================================

use crate::config::{
    ImportSource, ImportWorkerConfiguration, ReadSeek, RequiredConfiguration,
    PARAMETER_NAME_STREAM,
};
use crate::domain::container::{Container, MainData, Meta};
use crate::domain::types::Subset;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::row_processor::{RowStats, SheetImporter};
use crate::validator::Subset57Validator;
use calamine::{Range, Reader, Xlsx};
use chrono::Utc;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;
use tracing::{info, instrument};
use uuid::Uuid;

/// Domain-model subsets this worker can produce.
pub const SUPPORTED_SUBSETS: &[Subset] = &[Subset::S5_7];

const CREATOR: &str = "biis-import excel worker";
const FORMAT: &str = "XML";
const FORMAT_VERSION: &str = "1-0.6.2";

// ==========================================
// ImportSummary - per-import batch report
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub batch_id: String,
    pub sheet: String,
    pub stats: RowStats,
    pub properties: usize,
    pub elapsed_ms: u128,
}

// ==========================================
// BiisReader - the import worker
// ==========================================
// Holds at most one in-flight input resource; a second load()
// without unload() is rejected. The container survives unload
// so the caller can read the result afterwards.
#[derive(Default)]
pub struct BiisReader {
    container: Option<Container>,
    loaded: bool,
}

impl BiisReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supported_subsets(&self) -> &'static [Subset] {
        SUPPORTED_SUBSETS
    }

    pub fn required_configuration(&self) -> RequiredConfiguration {
        crate::config::required_configuration()
    }

    /// Runs one import. The input stream is consumed and released
    /// when this returns, success or not; the loaded state is only
    /// cleared by unload().
    #[instrument(skip(self, config))]
    pub fn load(&mut self, mut config: ImportWorkerConfiguration) -> ImportResult<ImportSummary> {
        if self.loaded {
            return Err(ImportError::AlreadyLoaded);
        }

        let source = config
            .source
            .take()
            .ok_or(ImportError::MissingParameter(PARAMETER_NAME_STREAM))?;
        self.loaded = true;

        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, "starting BIIS import");

        let reader: Box<dyn ReadSeek> = match source {
            ImportSource::Path(path) => {
                if !path.exists() {
                    return Err(ImportError::FileNotFound(path.display().to_string()));
                }
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if !ext.eq_ignore_ascii_case("xlsx") {
                    return Err(ImportError::UnsupportedFormat(ext.to_string()));
                }
                Box::new(BufReader::new(File::open(&path)?))
            }
            ImportSource::Stream(stream) => stream,
        };

        let mut workbook: Xlsx<_> = Xlsx::new(reader)?;

        let sheet_names = workbook.sheet_names().to_owned();
        let sheet_name = if let Some(number) = config.sheet_number {
            // 1-based; takes precedence over the name
            if number == 0 || number > sheet_names.len() {
                return Err(ImportError::SheetNotFound(format!("#{}", number)));
            }
            sheet_names[number - 1].clone()
        } else if let Some(name) = config.sheet_name.clone() {
            if !sheet_names.contains(&name) {
                return Err(ImportError::SheetNotFound(name));
            }
            name
        } else {
            return Err(ImportError::NoSheetSelected);
        };

        let cells = workbook.worksheet_range(&sheet_name)?;
        let formulas = workbook
            .worksheet_formula(&sheet_name)
            .unwrap_or_else(|_| Range::empty());

        let importer = SheetImporter::new(Subset57Validator);
        let (properties, stats) = importer.import(&cells, &formulas);

        let container = Container {
            meta: Meta {
                created: Utc::now(),
                creator: CREATOR.to_string(),
                format: FORMAT.to_string(),
                version: FORMAT_VERSION.to_string(),
            },
            maindata: MainData { properties },
        };

        let summary = ImportSummary {
            batch_id: batch_id.clone(),
            sheet: sheet_name,
            stats,
            properties: container.maindata.properties.len(),
            elapsed_ms: start_time.elapsed().as_millis(),
        };

        info!(
            batch_id = %batch_id,
            sheet = %summary.sheet,
            total = stats.total_rows,
            imported = stats.imported_rows,
            failed = stats.failed_rows,
            skipped = stats.skipped_rows,
            properties = summary.properties,
            elapsed_ms = summary.elapsed_ms,
            "BIIS import finished"
        );

        self.container = Some(container);
        Ok(summary)
    }

    /// The output aggregate of the last import, if any.
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// Hands the container over to the caller.
    pub fn take_container(&mut self) -> Option<Container> {
        self.container.take()
    }

    /// Releases the worker for reuse. The container is kept.
    pub fn unload(&mut self) {
        self.loaded = false;
    }
}
