//! cashflow-storage-json
//!
//! Reads the `cashflow.json` document (`startingBalance` plus `entries`) and
//! validates it into domain entries. The source is read-only.

use std::{
    fs,
    path::{Path, PathBuf},
};

use cashflow_core::{
    validate_entries, validate_starting_balance, CoreError, EntrySource, RawEntry,
};
use cashflow_domain::CashflowDocument;
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_FILE_NAME: &str = "cashflow.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    starting_balance: f64,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

/// Filesystem-backed JSON entry source.
#[derive(Debug, Clone)]
pub struct JsonEntrySource {
    path: PathBuf,
}

impl JsonEntrySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source reading `cashflow.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_FILE_NAME))
    }
}

impl EntrySource for JsonEntrySource {
    fn load_document(&self) -> Result<CashflowDocument, CoreError> {
        load_document_from_path(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses and validates a document held in memory.
pub fn parse_document(json: &str) -> Result<CashflowDocument, CoreError> {
    let raw: RawDocument =
        serde_json::from_str(json).map_err(|err| CoreError::Serialization(err.to_string()))?;
    let starting_balance = validate_starting_balance(raw.starting_balance)?;
    let entries = validate_entries(&raw.entries)?;
    Ok(CashflowDocument::new(starting_balance, entries))
}

pub fn load_document_from_path(path: &Path) -> Result<CashflowDocument, CoreError> {
    let data = fs::read_to_string(path).map_err(|err| {
        CoreError::Storage(format!("cannot read `{}`: {err}", path.display()))
    })?;
    let document = parse_document(&data)?;
    info!(
        path = %path.display(),
        entries = document.entries.len(),
        "loaded cash-flow document"
    );
    Ok(document)
}
