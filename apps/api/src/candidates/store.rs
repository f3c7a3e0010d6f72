//! Candidate storage — pluggable, trait-based record store.
//!
//! `AppState` holds an `Arc<dyn CandidateStore>`. The default backend keeps records in
//! memory behind a single `RwLock`, so concurrent writes are serialized.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateInput, CandidateRecord};

#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn create(&self, input: CandidateInput) -> Result<CandidateRecord, AppError>;

    async fn get(&self, id: Uuid) -> Result<CandidateRecord, AppError>;

    /// All records in creation order.
    async fn list(&self) -> Result<Vec<CandidateRecord>, AppError>;

    /// Replaces the profile, keeping `id` and `created_at`.
    async fn update(&self, id: Uuid, input: CandidateInput) -> Result<CandidateRecord, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Default)]
struct Records {
    by_id: HashMap<Uuid, CandidateRecord>,
    order: Vec<Uuid>,
}

#[derive(Default)]
pub struct InMemoryCandidateStore {
    records: RwLock<Records>,
}

impl InMemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Candidate {id} not found"))
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn create(&self, input: CandidateInput) -> Result<CandidateRecord, AppError> {
        let now = Utc::now();
        let record = CandidateRecord {
            id: Uuid::new_v4(),
            profile: input,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.records.write().await;
        records.order.push(record.id);
        records.by_id.insert(record.id, record.clone());
        debug!(id = %record.id, "Created candidate");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<CandidateRecord, AppError> {
        self.records
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id).cloned())
            .collect())
    }

    async fn update(&self, id: Uuid, input: CandidateInput) -> Result<CandidateRecord, AppError> {
        let mut records = self.records.write().await;
        let record = records.by_id.get_mut(&id).ok_or_else(|| not_found(id))?;
        record.profile = input;
        record.updated_at = Utc::now();
        debug!(id = %id, "Updated candidate");
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.by_id.remove(&id).ok_or_else(|| not_found(id))?;
        records.order.retain(|existing| *existing != id);
        debug!(id = %id, "Deleted candidate");
        Ok(())
    }
}
