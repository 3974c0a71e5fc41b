//! File-backed JSON key/value storage.
//!
//! One pretty-printed JSON file per key, written atomically (temp file
//! then rename) so a crash mid-write never leaves a half-document
//! behind.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// A directory of JSON documents keyed by file stem.
#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| io_error(&dir, source))?;
        Ok(Self { dir })
    }

    /// Load and deserialize the document for `key`.
    ///
    /// `Ok(None)` when the document does not exist; a present but
    /// unparsable document is an error the caller decides about.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&path, err)),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Serialize and persist the document for `key` atomically.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        let raw = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&tmp, raw.as_bytes())
            .await
            .map_err(|source| io_error(&tmp, source))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| io_error(&path, source))?;
        Ok(())
    }

    /// Remove the document for `key`; absent documents are fine.
    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&path, err)),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        label: String,
        count: u32,
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).await.unwrap();

        let doc = Doc {
            label: "brands".to_string(),
            count: 3,
        };
        kv.save("snapshot", &doc).await.unwrap();

        let loaded: Option<Doc> = kv.load("snapshot").await.unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[tokio::test]
    async fn missing_key_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).await.unwrap();
        let loaded: Option<Doc> = kv.load("nope").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn corrupt_document_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join("snapshot.json"), b"{ not json")
            .await
            .unwrap();

        let loaded: Result<Option<Doc>, _> = kv.load("snapshot").await;
        assert!(matches!(loaded, Err(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).await.unwrap();

        kv.save(
            "snapshot",
            &Doc {
                label: "a".to_string(),
                count: 1,
            },
        )
        .await
        .unwrap();
        kv.save(
            "snapshot",
            &Doc {
                label: "b".to_string(),
                count: 2,
            },
        )
        .await
        .unwrap();

        let loaded: Option<Doc> = kv.load("snapshot").await.unwrap();
        assert_eq!(loaded.unwrap().label, "b");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).await.unwrap();

        kv.save(
            "snapshot",
            &Doc {
                label: "a".to_string(),
                count: 1,
            },
        )
        .await
        .unwrap();
        kv.delete("snapshot").await.unwrap();
        kv.delete("snapshot").await.unwrap();

        let loaded: Option<Doc> = kv.load("snapshot").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn no_tmp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).await.unwrap();
        kv.save(
            "snapshot",
            &Doc {
                label: "a".to_string(),
                count: 1,
            },
        )
        .await
        .unwrap();

        assert!(!dir.path().join("snapshot.json.tmp").exists());
        assert!(dir.path().join("snapshot.json").exists());
    }
}
