//! Developer Repository Port
//!
//! Abstract interface for Developer persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Developer, DeveloperChanges, NewDeveloper};

/// Repository interface for Developer entities
///
/// `create` and `merge` only build values; nothing is persisted until
/// `save` is called.
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Build a new, unsaved Developer with a freshly assigned id
    fn create(&self, fields: NewDeveloper) -> Developer {
        Developer::new(Uuid::new_v4().to_string(), fields)
    }

    /// Apply partial fields onto an existing Developer
    fn merge(&self, developer: Developer, changes: &DeveloperChanges) -> Developer {
        developer.apply(changes)
    }

    /// Save a Developer (insert or update)
    async fn save(&self, developer: &Developer) -> Result<Developer, DomainError>;

    /// Find all Developers in storage order
    async fn find(&self) -> Result<Vec<Developer>, DomainError>;

    /// Find a Developer by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Developer>, DomainError>;

    /// Delete a Developer, returning it as it was before deletion
    async fn remove(&self, developer: Developer) -> Result<Developer, DomainError>;
}
