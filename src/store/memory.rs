//! In-memory metadata backend.
//!
//! Backs isolated tests of the core operations and doubles as a throwaway
//! dev backend; nothing survives process exit.

use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::ShareModel;

use super::ShareStore;

#[derive(Default)]
pub struct MemoryStore {
    shares: RwLock<Vec<ShareModel>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[tonic::async_trait]
impl ShareStore for MemoryStore {
    async fn insert(&self, share: &ShareModel) -> AppResult<()> {
        self.shares.write().await.push(share.clone());
        Ok(())
    }

    async fn find_by_keyphrase(&self, keyphrase: &str) -> AppResult<Vec<ShareModel>> {
        let shares = self.shares.read().await;
        // Insertion order, reversed: most-recent-first like the other backends.
        Ok(shares
            .iter()
            .rev()
            .filter(|s| s.keyphrase == keyphrase)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ShareModel>> {
        let shares = self.shares.read().await;
        Ok(shares.iter().find(|s| s.id == id).cloned())
    }

    async fn update(&self, share: &ShareModel) -> AppResult<()> {
        let mut shares = self.shares.write().await;
        let existing = shares
            .iter_mut()
            .find(|s| s.id == share.id)
            .ok_or_else(|| AppError::NotFound(format!("share not found: {}", share.id)))?;
        *existing = share.clone();
        Ok(())
    }

    async fn all(&self) -> AppResult<Vec<ShareModel>> {
        Ok(self.shares.read().await.clone())
    }
}
