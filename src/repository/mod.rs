use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::todo::Todo;

pub mod database;
#[cfg(test)]
pub mod memory;

pub use database::MongoDbClient;
#[cfg(test)]
pub use memory::InMemoryDatabase;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    MongoDb(#[from] mongodb::error::Error),
    #[error("inserted id is not an ObjectId")]
    UnexpectedId,
}

/// Storage for todos. Update, complete and delete report how many records
/// the id matched so callers can tell a missing record from a failure.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn ping(&self) -> Result<(), RepositoryError>;

    async fn list(&self) -> Result<Vec<Todo>, RepositoryError>;

    async fn get(&self, id: &ObjectId) -> Result<Option<Todo>, RepositoryError>;

    async fn create(&self, body: String) -> Result<Todo, RepositoryError>;

    /// Replaces the body and resets `completed` to false.
    async fn update_body(&self, id: &ObjectId, body: String) -> Result<u64, RepositoryError>;

    async fn complete(&self, id: &ObjectId) -> Result<u64, RepositoryError>;

    async fn delete(&self, id: &ObjectId) -> Result<u64, RepositoryError>;
}
