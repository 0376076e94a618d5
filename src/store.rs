//! Durable store: load-or-empty on the way in, full rewrite on the way out.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::SyncError;
use crate::types::IncidentStore;

/// Load the store from `path`.
///
/// A missing file is the expected first-run state and yields an empty
/// store. Any other open failure, or contents that do not decode as the
/// ID → record mapping, is fatal.
pub fn load(path: &Path) -> Result<IncidentStore, SyncError> {
  let contents = match fs::read(path) {
    Ok(contents) => contents,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(IncidentStore::new()),
    Err(source) => {
      return Err(SyncError::StoreOpen {
        path: path.to_path_buf(),
        source,
      })
    }
  };
  serde_json::from_slice(&contents).map_err(|source| SyncError::StoreDecode {
    path: path.to_path_buf(),
    source,
  })
}

/// Rewrite the store at `path` wholesale: two-space-indented JSON keyed
/// by incident ID, with a trailing newline.
pub fn save(path: &Path, store: &IncidentStore) -> Result<(), SyncError> {
  let mut encoded = serde_json::to_string_pretty(store).map_err(SyncError::StoreEncode)?;
  encoded.push('\n');
  fs::write(path, encoded).map_err(|source| SyncError::StoreWrite {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Incident;

  fn incident(id: &str) -> Incident {
    Incident {
      id: id.into(),
      updated: "2024-01-01T00:00:00Z".into(),
      title: "Incident A".into(),
      content: "desc".into(),
      link: format!("https://status.example/{}", id),
    }
  }

  #[test]
  fn missing_file_loads_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = load(&dir.path().join("data.json")).unwrap();
    assert!(store.is_empty());
  }

  #[test]
  fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut store = IncidentStore::new();
    store.insert("e1".into(), incident("e1"));
    store.insert("e2".into(), incident("e2"));
    save(&path, &store).unwrap();

    let reloaded = load(&path).unwrap();
    assert_eq!(reloaded, store);
  }

  #[test]
  fn saved_file_is_indented_and_newline_terminated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut store = IncidentStore::new();
    store.insert("e1".into(), incident("e1"));
    save(&path, &store).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("  \"e1\": {"));
    assert!(contents.contains("    \"id\": \"e1\""));
    assert!(contents.ends_with('\n'));
  }

  #[test]
  fn garbage_contents_are_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "not json").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, SyncError::StoreDecode { .. }));
  }

  #[test]
  fn save_into_missing_directory_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("data.json");

    let err = save(&path, &IncidentStore::new()).unwrap_err();
    assert!(matches!(err, SyncError::StoreWrite { .. }));
  }
}
