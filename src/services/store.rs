use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::DogRecord;

/// Errors that can occur while loading dog records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

/// Source of dog records for the matching engine
///
/// Implementations own the candidate pool precondition: only non-deleted
/// dogs with complete profiles are returned by `get_candidate_pool`, and
/// never the excluded dog itself.
#[async_trait]
pub trait DogStore: Send + Sync {
    /// Fetch a dog only if it belongs to `owner_id`
    async fn get_dog(&self, dog_id: Uuid, owner_id: Uuid) -> Result<Option<DogRecord>, StoreError>;

    /// Every matchable dog except `exclude_dog_id`
    async fn get_candidate_pool(&self, exclude_dog_id: Uuid) -> Result<Vec<DogRecord>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
