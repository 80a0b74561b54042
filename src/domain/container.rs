// ==========================================
// BIIS Import - Output Container
// ==========================================
// Top-level aggregate handed to the caller after an import:
// meta block + the property mapping. Replaced wholesale on
// every new import invocation.
// ==========================================

use crate::domain::property::Property;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Meta - import provenance
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub created: DateTime<Utc>,
    pub creator: String,
    pub format: String,
    pub version: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            created: Utc::now(),
            creator: String::new(),
            format: String::new(),
            version: String::new(),
        }
    }
}

// ==========================================
// MainData - entity mapping
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainData {
    /// Properties keyed by business object id. BTreeMap keeps
    /// the container output deterministic.
    pub properties: BTreeMap<String, Property>,
}

// ==========================================
// Container
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    pub meta: Meta,
    pub maindata: MainData,
}

impl Container {
    pub fn properties(&self) -> &BTreeMap<String, Property> {
        &self.maindata.properties
    }
}
