//! Postgres metadata backend.

use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::{Credential, ShareKind, ShareModel};

use super::ShareStore;

/// Raw row shape. The credential travels as two nullable columns;
/// [`ShareModel`] collapses them into the tagged form on the way out.
#[derive(Debug, Clone, FromRow)]
struct ShareRow {
    id: String,
    title: String,
    kind: String,
    text_content: Option<String>,
    filename: Option<String>,
    mime_type: Option<String>,
    blob: Option<String>,
    keyphrase: String,
    passcode_hash: Option<String>,
    passcode_plain: Option<String>,
    created: String,
}

impl TryFrom<ShareRow> for ShareModel {
    type Error = AppError;

    fn try_from(row: ShareRow) -> AppResult<Self> {
        let kind = ShareKind::parse(&row.kind)
            .ok_or_else(|| AppError::Internal(format!("share {} has unknown kind {}", row.id, row.kind)))?;
        // Once a hash is set the plaintext column must be NULL; if both
        // survive somehow, the hash wins.
        let credential = match (row.passcode_hash, row.passcode_plain) {
            (Some(hash), _) => Credential::Hashed(hash),
            (None, Some(plain)) => Credential::LegacyPlain(plain),
            (None, None) => {
                return Err(AppError::Internal(format!("share {} has no credential", row.id)))
            }
        };
        Ok(ShareModel {
            id: row.id,
            title: row.title,
            kind,
            text: row.text_content,
            filename: row.filename,
            mime_type: row.mime_type,
            blob: row.blob,
            keyphrase: row.keyphrase,
            credential,
            created: row.created,
        })
    }
}

fn credential_columns(credential: &Credential) -> (Option<&str>, Option<&str>) {
    match credential {
        Credential::Hashed(hash) => (Some(hash.as_str()), None),
        Credential::LegacyPlain(plain) => (None, Some(plain.as_str())),
    }
}

/// Drops rows that cannot be represented, with a warning. One corrupt
/// record must not take down every lookup that scans past it.
fn collect_rows(rows: Vec<ShareRow>) -> Vec<ShareModel> {
    rows.into_iter()
        .filter_map(|row| match ShareModel::try_from(row) {
            Ok(share) => Some(share),
            Err(e) => {
                tracing::warn!("skipping unreadable share row: {}", e);
                None
            }
        })
        .collect()
}

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the shares table and keyphrase index if absent. Run once at
    /// startup before the store is handed out.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS shares (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                kind TEXT NOT NULL,
                text_content TEXT,
                filename TEXT,
                mime_type TEXT,
                blob TEXT,
                keyphrase TEXT NOT NULL,
                passcode_hash TEXT,
                passcode_plain TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                CONSTRAINT shares_credential_present
                    CHECK (passcode_hash IS NOT NULL OR passcode_plain IS NOT NULL)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS shares_keyphrase_idx ON shares (keyphrase)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[tonic::async_trait]
impl ShareStore for PostgresStore {
    async fn insert(&self, share: &ShareModel) -> AppResult<()> {
        let (hash, plain) = credential_columns(&share.credential);

        sqlx::query(
            r#"
            INSERT INTO shares
                (id, title, kind, text_content, filename, mime_type, blob,
                 keyphrase, passcode_hash, passcode_plain, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11::timestamptz)
            "#,
        )
        .bind(&share.id)
        .bind(&share.title)
        .bind(share.kind.as_str())
        .bind(&share.text)
        .bind(&share.filename)
        .bind(&share.mime_type)
        .bind(&share.blob)
        .bind(&share.keyphrase)
        .bind(hash)
        .bind(plain)
        .bind(&share.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_keyphrase(&self, keyphrase: &str) -> AppResult<Vec<ShareModel>> {
        let rows = sqlx::query_as::<_, ShareRow>(
            r#"
            SELECT id, title, kind, text_content, filename, mime_type, blob,
                   keyphrase, passcode_hash, passcode_plain,
                   to_char(created_at, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') as created
            FROM shares
            WHERE keyphrase = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(keyphrase)
        .fetch_all(&self.pool)
        .await?;

        Ok(collect_rows(rows))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ShareModel>> {
        let row = sqlx::query_as::<_, ShareRow>(
            r#"
            SELECT id, title, kind, text_content, filename, mime_type, blob,
                   keyphrase, passcode_hash, passcode_plain,
                   to_char(created_at, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') as created
            FROM shares
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(ShareModel::try_from(row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, share: &ShareModel) -> AppResult<()> {
        let (hash, plain) = credential_columns(&share.credential);

        let result = sqlx::query(
            "UPDATE shares SET passcode_hash = $1, passcode_plain = $2 WHERE id = $3",
        )
        .bind(hash)
        .bind(plain)
        .bind(&share.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("share not found: {}", share.id)));
        }

        Ok(())
    }

    async fn all(&self) -> AppResult<Vec<ShareModel>> {
        let rows = sqlx::query_as::<_, ShareRow>(
            r#"
            SELECT id, title, kind, text_content, filename, mime_type, NULL as blob,
                   keyphrase, passcode_hash, passcode_plain,
                   to_char(created_at, 'YYYY-MM-DD"T"HH24:MI:SS"Z"') as created
            FROM shares
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(collect_rows(rows))
    }
}
