//! Persisted snapshot adapter.
//!
//! # Responsibility
//! - Encode the full ordered item sequence as JSON and replace the slot.
//! - Restore the sequence once at session start.
//!
//! # Invariants
//! - `load` never fails: absent, empty, unparseable or invalid snapshots
//!   yield an empty sequence.
//! - `save` always writes the whole sequence.

use crate::model::item::{Item, ItemId};
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a persisted snapshot is discarded.
#[derive(Debug)]
pub enum SnapshotError {
    /// Not a JSON array of valid item records.
    Parse(serde_json::Error),
    /// Two records share one id.
    DuplicateId(ItemId),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid snapshot: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate item id in snapshot: {id}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Serializes items into the snapshot wire format.
pub fn encode_snapshot(items: &[Item]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

/// Decodes a snapshot, validating every record.
///
/// Duplicate ids make the snapshot invalid.
pub fn decode_snapshot(raw: &str) -> Result<Vec<Item>, SnapshotError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Vec<Item> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(items.len());
    if let Some(item) = items.iter().find(|item| !seen.insert(item.id)) {
        return Err(SnapshotError::DuplicateId(item.id));
    }
    Ok(items)
}

/// Reads and writes the snapshot slot through a `SlotRepository`.
pub struct SnapshotStore<R: SlotRepository> {
    repo: R,
    slot_key: String,
}

impl<R: SlotRepository> SnapshotStore<R> {
    pub fn new(repo: R, slot_key: impl Into<String>) -> Self {
        Self {
            repo,
            slot_key: slot_key.into(),
        }
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Restores the persisted item sequence.
    ///
    /// Failures are logged and degrade to an empty sequence.
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.repo.read_slot(&self.slot_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=snapshot_load module=store status=absent");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=store status=error error_code=slot_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match decode_snapshot(&raw) {
            Ok(items) => {
                debug!(
                    "event=snapshot_load module=store status=ok items={}",
                    items.len()
                );
                items
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=store status=discarded error_code=snapshot_invalid bytes={} error={err}",
                    raw.len()
                );
                Vec::new()
            }
        }
    }

    /// Replaces the slot with the full item sequence.
    pub fn save(&self, items: &[Item]) -> RepoResult<()> {
        let encoded = encode_snapshot(items)?;
        self.repo.write_slot(&self.slot_key, &encoded)?;
        debug!(
            "event=snapshot_save module=store status=ok items={} bytes={}",
            items.len(),
            encoded.len()
        );
        Ok(())
    }
}
