use crate::snapshot::CardSnapshot;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

const SNAPSHOT_FILE: &str = "recipe_card_state_v1.json";

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "I/O error: {err}"),
            StoreError::Serde(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Local key-value persistence for the card snapshot.
///
/// Saving is best-effort: failures are logged and swallowed so persistence
/// can never block the cooking flow. Loading treats an absent or unparsable
/// snapshot as "no prior state".
pub trait SnapshotStore {
    fn save(&self, snapshot: &CardSnapshot);
    fn load(&self) -> Option<CardSnapshot>;
}

/// Snapshot store backed by one fixed JSON file under a base directory,
/// written atomically through a temp file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: base_dir.into().join(SNAPSHOT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_snapshot(&self, snapshot: &CardSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("tmp");
        let file = fs::File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        match fs::rename(&temp_path, &self.path) {
            Ok(()) => Ok(()),
            Err(_err) if self.path.exists() => {
                let _ = fs::remove_file(&self.path);
                fs::rename(&temp_path, &self.path).map_err(StoreError::from)
            }
            Err(err) => Err(StoreError::from(err)),
        }
    }

    fn read_snapshot(&self) -> Result<Option<CardSnapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }
        let snapshot = serde_json::from_str(&contents)?;
        Ok(Some(snapshot))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, snapshot: &CardSnapshot) {
        if let Err(err) = self.write_snapshot(snapshot) {
            warn!("failed to persist card snapshot: {err}");
        }
    }

    fn load(&self) -> Option<CardSnapshot> {
        match self.read_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("discarding unreadable card snapshot: {err}");
                None
            }
        }
    }
}

/// Fallback when local storage is unavailable: saves vanish, loads find
/// nothing, the card keeps working.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSnapshotStore;

impl SnapshotStore for NullSnapshotStore {
    fn save(&self, _snapshot: &CardSnapshot) {}

    fn load(&self) -> Option<CardSnapshot> {
        None
    }
}
