// Durable storage for what the opponent has learned

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::weights::BehaviorWeights;
use super::zones::ZoneHistogram;

/// Fixed identifier the learned state is stored under
pub const STORAGE_KEY: &str = "penaltyShootersAI";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Learned opponent state as written to storage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedBehavior {
    #[serde(default)]
    pub weights: BehaviorWeights,
    #[serde(default)]
    pub player_model: ZoneHistogram,
}

/// Where the opponent's weights and histogram live between sessions
pub trait BehaviorStore {
    /// Read the stored record. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> Result<Option<PersistedBehavior>, StoreError>;

    /// Overwrite the stored record
    fn save(&mut self, record: &PersistedBehavior) -> Result<(), StoreError>;
}

/// Get the path of the JSON file backing the default store
pub fn default_store_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotkick");
    path.push(format!("{}.json", STORAGE_KEY));
    path
}

/// JSON file on disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BehaviorStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedBehavior>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&contents)?;
        Ok(Some(record))
    }

    fn save(&mut self, record: &PersistedBehavior) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store used when nothing should touch the disk
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the opponent saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<PersistedBehavior>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: PersistedBehavior) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(record))),
        }
    }

    pub fn snapshot(&self) -> Option<PersistedBehavior> {
        self.slot.borrow().clone()
    }
}

impl BehaviorStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedBehavior>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&mut self, record: &PersistedBehavior) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(record.clone());
        Ok(())
    }
}
