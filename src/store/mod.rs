// Store abstraction for share metadata backends

pub mod json;
pub mod memory;
pub mod postgres;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use crate::error::AppResult;
use crate::models::ShareModel;

/// Metadata store abstraction (Postgres / JSON file / in-memory).
///
/// All backends return keyphrase lookups most-recent-first.
#[tonic::async_trait]
pub trait ShareStore: Send + Sync {
    /// Persists a new share. Failure must propagate: a share that was not
    /// durably stored must never be reported as created.
    async fn insert(&self, share: &ShareModel) -> AppResult<()>;

    /// All shares whose keyphrase matches exactly (case-sensitive),
    /// most-recent-first. An empty result is not an error.
    async fn find_by_keyphrase(&self, keyphrase: &str) -> AppResult<Vec<ShareModel>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ShareModel>>;

    /// Rewrites an existing record's credential fields. Only the legacy
    /// passcode migration calls this.
    async fn update(&self, share: &ShareModel) -> AppResult<()>;

    /// Full scan, oldest first, without file bytes. Used by the startup
    /// migration.
    async fn all(&self) -> AppResult<Vec<ShareModel>>;
}
