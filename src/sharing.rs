//! Core share operations: creation and credential-checked retrieval.
//!
//! The two-factor policy: the keyphrase is a coarse partition key matched
//! exactly, the passcode is the secret verified per candidate. Several
//! shares may sit behind one keyphrase with different passcodes; a claim
//! surfaces only the subset whose passcode verifies.

use crate::error::{AppError, AppResult};
use crate::keyphrase;
use crate::models::{Credential, ShareKind, ShareModel};
use crate::passcode;
use crate::store::ShareStore;

/// Input to [`create_share`].
#[derive(Debug, Clone, Default)]
pub struct NewShare {
    pub kind: Option<ShareKind>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub filename: Option<String>,
    pub mime_type: Option<String>,
    /// Base64-encoded file bytes for file shares.
    pub blob: Option<String>,
    pub keyphrase: Option<String>,
}

/// Creation result. `passcode` is the only place the plaintext ever
/// surfaces; it is not persisted and must not be logged.
#[derive(Debug, Clone)]
pub struct CreatedShare {
    pub id: String,
    pub keyphrase: String,
    pub passcode: String,
    pub created: String,
}

/// Hosts a new share: resolves the keyphrase, generates and hashes a fresh
/// passcode, and persists the record. The plaintext passcode is returned
/// only when the insert succeeded.
pub async fn create_share(
    store: &dyn ShareStore,
    new: NewShare,
    time_cost: u32,
) -> AppResult<CreatedShare> {
    let kind = new
        .kind
        .ok_or_else(|| AppError::InvalidInput("kind must be \"text\" or \"file\"".to_string()))?;
    let keyphrase = keyphrase::resolve(new.keyphrase.as_deref());
    let plain = passcode::generate();
    // A hashing failure aborts the whole operation; the share must never be
    // persisted without a valid hash.
    let hash = passcode::hash(&plain, time_cost).await?;

    let share = match kind {
        ShareKind::Text => {
            let text = new
                .text
                .filter(|t| !t.is_empty())
                .ok_or_else(|| AppError::InvalidInput("text share requires text".to_string()))?;
            ShareModel::new_text(new.title, text, keyphrase, Credential::Hashed(hash))
        }
        ShareKind::File => {
            let blob = new
                .blob
                .filter(|b| !b.is_empty())
                .ok_or_else(|| AppError::InvalidInput("file share requires content".to_string()))?;
            let filename = new
                .filename
                .filter(|f| !f.is_empty())
                .ok_or_else(|| AppError::InvalidInput("file share requires a filename".to_string()))?;
            let mime_type = new
                .mime_type
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "application/octet-stream".to_string());
            ShareModel::new_file(new.title, filename, mime_type, blob, keyphrase, Credential::Hashed(hash))
        }
    };

    store.insert(&share).await?;

    Ok(CreatedShare {
        id: share.id,
        keyphrase: share.keyphrase,
        passcode: plain,
        created: share.created,
    })
}

/// Returns the stored shares matching both factors, most-recent-first.
///
/// An empty result is a normal outcome; callers translate it into the one
/// opaque "not found or invalid credentials" response so neither factor is
/// revealed. Read-only and safe to abandon mid-flight.
pub async fn authorize(
    store: &dyn ShareStore,
    keyphrase: &str,
    passcode_plain: &str,
) -> AppResult<Vec<ShareModel>> {
    if keyphrase.is_empty() {
        return Ok(Vec::new());
    }

    let candidates = store.find_by_keyphrase(keyphrase).await?;
    let mut matched = Vec::with_capacity(candidates.len());
    for share in candidates {
        if passcode::verify_credential(passcode_plain, &share.credential).await {
            matched.push(share);
        }
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const TEST_COST: u32 = 1;

    fn text_share(text: &str) -> NewShare {
        NewShare {
            kind: Some(ShareKind::Text),
            text: Some(text.to_string()),
            ..NewShare::default()
        }
    }

    async fn insert_with_passcode(store: &MemoryStore, keyphrase: &str, plain: &str) -> ShareModel {
        let hash = passcode::hash(plain, TEST_COST).await.unwrap();
        let share = ShareModel::new_text(
            None,
            "content".to_string(),
            keyphrase.to_string(),
            Credential::Hashed(hash),
        );
        store.insert(&share).await.unwrap();
        share
    }

    #[tokio::test]
    async fn test_create_then_claim_round_trip() {
        let store = MemoryStore::new();
        let created = create_share(&store, text_share("hello"), TEST_COST)
            .await
            .unwrap();

        assert_eq!(created.keyphrase.split('-').count(), 3);
        assert_eq!(created.passcode.len(), 4);
        assert!(created.passcode.chars().all(|c| c.is_ascii_digit()));

        let matched = authorize(&store, &created.keyphrase, &created.passcode)
            .await
            .unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, created.id);
        assert!(matched[0].credential.is_hashed());
    }

    #[tokio::test]
    async fn test_wrong_passcode_is_excluded() {
        let store = MemoryStore::new();
        let created = create_share(&store, text_share("hello"), TEST_COST)
            .await
            .unwrap();

        let wrong = if created.passcode == "0000" { "0001" } else { "0000" };
        assert!(authorize(&store, &created.keyphrase, wrong)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_keyphrase_match_is_case_sensitive() {
        let store = MemoryStore::new();
        let share = insert_with_passcode(&store, "Apple-River-Sun", "1234").await;

        assert!(authorize(&store, "apple-river-sun", "1234")
            .await
            .unwrap()
            .is_empty());
        let matched = authorize(&store, "Apple-River-Sun", "1234").await.unwrap();
        assert_eq!(matched[0].id, share.id);
    }

    #[tokio::test]
    async fn test_shared_keyphrase_family_splits_by_passcode() {
        let store = MemoryStore::new();
        let first = insert_with_passcode(&store, "shared-link-demo", "1111").await;
        let second = insert_with_passcode(&store, "shared-link-demo", "2222").await;

        let a = authorize(&store, "shared-link-demo", "1111").await.unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].id, first.id);

        let b = authorize(&store, "shared-link-demo", "2222").await.unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].id, second.id);

        assert!(authorize(&store, "shared-link-demo", "9999")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_family_with_same_passcode_is_recent_first() {
        let store = MemoryStore::new();
        let older = insert_with_passcode(&store, "shared-link-demo", "4242").await;
        let newer = insert_with_passcode(&store, "shared-link-demo", "4242").await;

        let matched = authorize(&store, "shared-link-demo", "4242").await.unwrap();
        let ids: Vec<&str> = matched.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);
    }

    #[tokio::test]
    async fn test_legacy_plain_record_authorizes() {
        let store = MemoryStore::new();
        let share = ShareModel::new_text(
            None,
            "old note".to_string(),
            "amber-brook-fern".to_string(),
            Credential::LegacyPlain("0042".to_string()),
        );
        store.insert(&share).await.unwrap();

        let matched = authorize(&store, "amber-brook-fern", "0042").await.unwrap();
        assert_eq!(matched[0].id, share.id);
        assert!(authorize(&store, "amber-brook-fern", "0043")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_content() {
        let store = MemoryStore::new();
        let err = create_share(&store, text_share(""), TEST_COST).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = create_share(
            &store,
            NewShare {
                kind: Some(ShareKind::File),
                filename: Some("report.pdf".to_string()),
                ..NewShare::default()
            },
            TEST_COST,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_supplied_keyphrase_is_used_verbatim() {
        let store = MemoryStore::new();
        let created = create_share(
            &store,
            NewShare {
                keyphrase: Some("  my-own-phrase ".to_string()),
                ..text_share("hello")
            },
            TEST_COST,
        )
        .await
        .unwrap();
        assert_eq!(created.keyphrase, "my-own-phrase");
    }

    /// Store whose insert always fails: the creation must surface the error
    /// and never hand out the generated passcode.
    struct FailingStore;

    #[tonic::async_trait]
    impl ShareStore for FailingStore {
        async fn insert(&self, _share: &ShareModel) -> AppResult<()> {
            Err(AppError::Internal("disk full".to_string()))
        }
        async fn find_by_keyphrase(&self, _keyphrase: &str) -> AppResult<Vec<ShareModel>> {
            Ok(Vec::new())
        }
        async fn find_by_id(&self, _id: &str) -> AppResult<Option<ShareModel>> {
            Ok(None)
        }
        async fn update(&self, _share: &ShareModel) -> AppResult<()> {
            Ok(())
        }
        async fn all(&self) -> AppResult<Vec<ShareModel>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_failed_insert_aborts_creation() {
        let err = create_share(&FailingStore, text_share("hello"), TEST_COST)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
