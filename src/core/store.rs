//! Single-file record store for creatures.
//!
//! The whole collection is one JSON array. Every save is a full
//! read-modify-write followed by a wholesale overwrite of the file.
//!
//! Within one process saves are serialized by a global lock and the new
//! collection is written to a sibling temp file before being renamed into
//! place. Across processes there is no locking: two writers racing on the same
//! file resolve as last-writer-wins for the whole collection.

use crate::core::error::BestiaryError;
use crate::core::record::CreatureRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};

const EMPTY_COLLECTION: &str = "[]";

/// Serializes read-modify-write cycles within this process.
static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// Configuration handed to the store at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the backing JSON file.
    pub data_file: PathBuf,
    /// Pretty-print the collection when writing.
    pub pretty: bool,
}

impl StoreConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            pretty: true,
        }
    }
}

/// Where a saved record ended up in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted { index: usize },
    Replaced { index: usize },
}

impl SaveOutcome {
    pub fn index(&self) -> usize {
        match self {
            SaveOutcome::Inserted { index } | SaveOutcome::Replaced { index } => *index,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SaveOutcome::Inserted { .. } => "inserted",
            SaveOutcome::Replaced { .. } => "replaced",
        }
    }
}

/// Store handle over one backing file. Holds no open resources between calls.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.data_file
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Read every stored record in file order.
    ///
    /// A missing (or blank) backing file is initialized to an empty collection
    /// and reported as no records.
    pub fn load_all(&self) -> Result<Vec<CreatureRecord>, BestiaryError> {
        let path = self.path();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.bootstrap()?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(BestiaryError::IoError(e)),
        };

        if raw.trim().is_empty() {
            self.bootstrap()?;
            return Ok(Vec::new());
        }

        let records: Vec<CreatureRecord> = serde_json::from_str(&raw).map_err(|e| {
            BestiaryError::StoreFormatError(format!(
                "{} is not a creature collection: {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), records = records.len(), "loaded creature store");
        Ok(records)
    }

    /// First record whose name matches exactly, in stored order.
    pub fn find_by_name(&self, name: &str) -> Result<Option<CreatureRecord>, BestiaryError> {
        let records = self.load_all()?;
        let mut matches = records.into_iter().filter(|r| r.is_named(name));
        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            warn!(name, "multiple stored creatures share this name; using the first");
        }
        Ok(first)
    }

    /// Upsert by name: replace the first record with the same name in place,
    /// otherwise append. The whole collection is then rewritten.
    pub fn save(&self, record: CreatureRecord) -> Result<SaveOutcome, BestiaryError> {
        self.write_record(record, false)
    }

    /// Append a record whose name is not stored yet. Fails with a validation
    /// error, leaving the file untouched, when the name is already taken.
    pub fn insert_new(&self, record: CreatureRecord) -> Result<SaveOutcome, BestiaryError> {
        self.write_record(record, true)
    }

    fn write_record(
        &self,
        record: CreatureRecord,
        require_new: bool,
    ) -> Result<SaveOutcome, BestiaryError> {
        let name = match record.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(BestiaryError::ValidationError(
                    "cannot save a creature without a name".to_string(),
                ));
            }
        };

        let _guard = WRITE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut records = self.load_all()?;
        let outcome = match records.iter().position(|r| r.is_named(&name)) {
            Some(_) if require_new => {
                return Err(BestiaryError::ValidationError(format!(
                    "creature '{}' already exists",
                    name
                )));
            }
            Some(index) => {
                records[index] = record;
                SaveOutcome::Replaced { index }
            }
            None => {
                records.push(record);
                SaveOutcome::Inserted {
                    index: records.len() - 1,
                }
            }
        };

        self.write_all(&records)?;
        info!(
            name = %name,
            outcome = outcome.as_str(),
            index = outcome.index(),
            total = records.len(),
            "saved creature"
        );
        Ok(outcome)
    }

    fn bootstrap(&self) -> Result<(), BestiaryError> {
        let path = self.path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(BestiaryError::IoError)?;
        }
        fs::write(path, EMPTY_COLLECTION).map_err(BestiaryError::IoError)?;
        info!(path = %path.display(), "initialized empty creature store");
        Ok(())
    }

    fn write_all(&self, records: &[CreatureRecord]) -> Result<(), BestiaryError> {
        let path = self.path();
        let body = if self.config.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };

        let tmp_path = tmp_path_for(path);
        fs::write(&tmp_path, body).map_err(BestiaryError::IoError)?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                warn!(path = %tmp_path.display(), error = %cleanup, "could not remove temp file");
            }
            return Err(BestiaryError::IoError(e));
        }
        Ok(())
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
