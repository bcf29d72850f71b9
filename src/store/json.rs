//! JSON-file metadata backend.
//!
//! Every record lives in a single JSON array on disk, held in memory behind
//! an `RwLock` and rewritten whole on each mutation (the data set is small).
//! The rewrite goes through a temp file + rename so a crash mid-write never
//! truncates the store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{Credential, ShareKind, ShareModel};

use super::ShareStore;

/// On-disk record shape. The credential is persisted as two optional
/// fields so files written before hashing was introduced (plaintext
/// `passcode`) stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShareRecord {
    id: String,
    title: String,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    blob: Option<String>,
    keyphrase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    passcode_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    passcode: Option<String>,
    created: String,
}

impl From<&ShareModel> for ShareRecord {
    fn from(share: &ShareModel) -> Self {
        let (passcode_hash, passcode) = match &share.credential {
            Credential::Hashed(hash) => (Some(hash.clone()), None),
            Credential::LegacyPlain(plain) => (None, Some(plain.clone())),
        };
        Self {
            id: share.id.clone(),
            title: share.title.clone(),
            kind: share.kind.as_str().to_string(),
            text: share.text.clone(),
            filename: share.filename.clone(),
            mime_type: share.mime_type.clone(),
            blob: share.blob.clone(),
            keyphrase: share.keyphrase.clone(),
            passcode_hash,
            passcode,
            created: share.created.clone(),
        }
    }
}

impl TryFrom<&ShareRecord> for ShareModel {
    type Error = AppError;

    fn try_from(record: &ShareRecord) -> AppResult<Self> {
        let kind = ShareKind::parse(&record.kind).ok_or_else(|| {
            AppError::Internal(format!("share {} has unknown kind {}", record.id, record.kind))
        })?;
        let credential = match (&record.passcode_hash, &record.passcode) {
            (Some(hash), _) => Credential::Hashed(hash.clone()),
            (None, Some(plain)) => Credential::LegacyPlain(plain.clone()),
            (None, None) => {
                return Err(AppError::Internal(format!(
                    "share {} has no credential",
                    record.id
                )))
            }
        };
        Ok(ShareModel {
            id: record.id.clone(),
            title: record.title.clone(),
            kind,
            text: record.text.clone(),
            filename: record.filename.clone(),
            mime_type: record.mime_type.clone(),
            blob: record.blob.clone(),
            keyphrase: record.keyphrase.clone(),
            credential,
            created: record.created.clone(),
        })
    }
}

/// Warn-and-skip conversion: an unreadable record is excluded from reads
/// but stays untouched in the file.
fn readable(record: &ShareRecord) -> Option<ShareModel> {
    match ShareModel::try_from(record) {
        Ok(share) => Some(share),
        Err(e) => {
            tracing::warn!("skipping unreadable share record: {}", e);
            None
        }
    }
}

pub struct JsonFileStore {
    path: PathBuf,
    records: RwLock<Vec<ShareRecord>>,
}

impl JsonFileStore {
    /// Loads the store file, creating an empty store when the file does
    /// not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Rewrites the whole file. Called with the write lock held so the
    /// snapshot is consistent.
    async fn persist(&self, records: &[ShareRecord]) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[tonic::async_trait]
impl ShareStore for JsonFileStore {
    async fn insert(&self, share: &ShareModel) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.push(ShareRecord::from(share));
        if let Err(e) = self.persist(&records).await {
            // Keep memory and disk in agreement: the caller will report
            // the creation as failed.
            records.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn find_by_keyphrase(&self, keyphrase: &str) -> AppResult<Vec<ShareModel>> {
        let records = self.records.read().await;
        // The file appends in insertion order; reverse for most-recent-first.
        Ok(records
            .iter()
            .rev()
            .filter(|r| r.keyphrase == keyphrase)
            .filter_map(readable)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ShareModel>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).and_then(readable))
    }

    async fn update(&self, share: &ShareModel) -> AppResult<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id == share.id)
            .ok_or_else(|| AppError::NotFound(format!("share not found: {}", share.id)))?;

        let previous = records[index].clone();
        let (hash, plain) = match &share.credential {
            Credential::Hashed(h) => (Some(h.clone()), None),
            Credential::LegacyPlain(p) => (None, Some(p.clone())),
        };
        records[index].passcode_hash = hash;
        records[index].passcode = plain;

        if let Err(e) = self.persist(&records).await {
            records[index] = previous;
            return Err(e);
        }
        Ok(())
    }

    async fn all(&self) -> AppResult<Vec<ShareModel>> {
        let records = self.records.read().await;
        Ok(records.iter().filter_map(readable).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_share(keyphrase: &str, credential: Credential) -> ShareModel {
        ShareModel::new_text(
            Some("note".to_string()),
            "hello".to_string(),
            keyphrase.to_string(),
            credential,
        )
    }

    #[tokio::test]
    async fn test_insert_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shares.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        let share = sample_share("apple-river-sun", Credential::Hashed("$h".to_string()));
        store.insert(&share).await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let found = reopened.find_by_id(&share.id).await.unwrap().unwrap();
        assert_eq!(found, share);
    }

    #[tokio::test]
    async fn test_find_by_keyphrase_is_exact_and_recent_first() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("shares.json")).await.unwrap();

        let older = sample_share("apple-river-sun", Credential::Hashed("$a".to_string()));
        let newer = sample_share("apple-river-sun", Credential::Hashed("$b".to_string()));
        let other = sample_share("Apple-River-Sun", Credential::Hashed("$c".to_string()));
        store.insert(&older).await.unwrap();
        store.insert(&newer).await.unwrap();
        store.insert(&other).await.unwrap();

        let found = store.find_by_keyphrase("apple-river-sun").await.unwrap();
        let ids: Vec<&str> = found.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);

        assert!(store.find_by_keyphrase("maple-river-sun").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_file_records_load_as_plain() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shares.json");
        // A record written before hashing existed: `passcode` in the clear,
        // no `passcode_hash` field at all.
        std::fs::write(
            &path,
            r#"[{
                "id": "legacy-1",
                "title": "untitled",
                "kind": "text",
                "text": "old note",
                "keyphrase": "amber-brook-fern",
                "passcode": "0042",
                "created": "2019-03-01T00:00:00Z"
            }]"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let found = store.find_by_id("legacy-1").await.unwrap().unwrap();
        assert_eq!(found.credential, Credential::LegacyPlain("0042".to_string()));

        // Rewriting the credential drops the plaintext field from the file.
        let mut migrated = found.clone();
        migrated.credential = Credential::Hashed("$argon2id$stub".to_string());
        store.update(&migrated).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("\"passcode\""));
        assert!(raw.contains("passcode_hash"));
    }

    #[tokio::test]
    async fn test_credential_less_record_is_skipped_but_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shares.json");
        std::fs::write(
            &path,
            r#"[{
                "id": "broken-1",
                "title": "untitled",
                "kind": "text",
                "keyphrase": "amber-brook-fern",
                "created": "2019-03-01T00:00:00Z"
            }]"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        assert!(store.all().await.unwrap().is_empty());
        assert!(store.find_by_id("broken-1").await.unwrap().is_none());

        // An unrelated insert rewrites the file without losing the record.
        let share = sample_share("cedar-delta-ember", Credential::Hashed("$h".to_string()));
        store.insert(&share).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("broken-1"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("shares.json")).await.unwrap();
        let share = sample_share("apple-river-sun", Credential::Hashed("$h".to_string()));
        let err = store.update(&share).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
