use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use portal_core::model::{AssignmentKey, KeyParseError, NoteKey};
use serde_json::{Map, Value};

use crate::repository::StorageError;

/// A structured key with a string encoding used as a JSON object key.
pub(crate) trait SnapshotKey: Ord + Clone + FromStr<Err = KeyParseError> + Send + Sync {
    fn encode(&self) -> String;
}

impl SnapshotKey for NoteKey {
    fn encode(&self) -> String {
        NoteKey::encode(self)
    }
}

impl SnapshotKey for AssignmentKey {
    fn encode(&self) -> String {
        AssignmentKey::encode(self)
    }
}

/// Read a flat `key -> string` JSON object.
///
/// A missing, unreadable, or malformed file yields an empty map. Entries whose
/// key does not parse or whose value is not a string are skipped.
pub(crate) async fn load_map<K: SnapshotKey>(path: &Path) -> BTreeMap<K, String> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("{} not found, starting empty", path.display());
            return BTreeMap::new();
        }
        Err(err) => {
            log::warn!("failed to read {}: {err}; starting empty", path.display());
            return BTreeMap::new();
        }
    };

    let object: Map<String, Value> = match serde_json::from_str(&raw) {
        Ok(object) => object,
        Err(err) => {
            log::warn!("malformed {}: {err}; starting empty", path.display());
            return BTreeMap::new();
        }
    };

    let mut map = BTreeMap::new();
    for (raw_key, value) in object {
        let Value::String(text) = value else {
            log::warn!("skipping non-string value for {raw_key:?} in {}", path.display());
            continue;
        };
        match raw_key.parse::<K>() {
            Ok(key) => {
                map.insert(key, text);
            }
            Err(err) => log::warn!("skipping entry in {}: {err}", path.display()),
        }
    }
    log::debug!("loaded {} entries from {}", map.len(), path.display());
    map
}

/// Write the whole map as pretty JSON via a sibling temp file and a rename.
///
/// # Errors
///
/// Returns `StorageError::Serialization` or `StorageError::Io`.
pub(crate) async fn write_map<K: SnapshotKey>(
    path: &Path,
    map: &BTreeMap<K, String>,
) -> Result<(), StorageError> {
    let object: Map<String, Value> = map
        .iter()
        .map(|(key, text)| (key.encode(), Value::String(text.clone())))
        .collect();
    let json = serde_json::to_string_pretty(&object)
        .map_err(|err| StorageError::Serialization(err.to_string()))?;
    write_atomic(path, json.as_bytes()).await
}

/// # Errors
///
/// Returns `StorageError::Io` if the temp file cannot be written or renamed.
/// A failed rename removes the temp file.
pub(crate) async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let tmp = temp_path(path);
    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|err| StorageError::Io(format!("{}: {err}", tmp.display())))?;
    if let Err(err) = tokio::fs::rename(&tmp, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
            log::debug!("could not remove {}: {cleanup}", tmp.display());
        }
        return Err(StorageError::Io(format!("{}: {err}", path.display())));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
