//! Developer Application Service (Use Case)
//!
//! Turns generic repository results into presence/absence semantics.

use std::sync::Arc;

use devhub::{Developer, DeveloperChanges, DeveloperRepository, DomainError, Mutation, NewDeveloper};

/// Application service for Developer operations
pub struct DeveloperService<R: DeveloperRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: DeveloperRepository + ?Sized> DeveloperService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a new Developer; the repository assigns the id
    pub async fn create(&self, fields: NewDeveloper) -> Result<Developer, DomainError> {
        let developer = self.repo.create(fields);
        let saved = self.repo.save(&developer).await?;

        tracing::info!("Created Developer: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Get all Developers
    pub async fn find_all(&self) -> Result<Vec<Developer>, DomainError> {
        self.repo.find().await
    }

    /// Get a Developer by ID, `None` when absent
    pub async fn find_one(&self, id: &str) -> Result<Option<Developer>, DomainError> {
        let developer = self.repo.find_by_id(id).await?;
        if developer.is_none() {
            tracing::debug!("Developer {} not found", id);
        }
        Ok(developer)
    }

    /// Merge the supplied fields onto an existing Developer and save it
    pub async fn update(
        &self,
        id: &str,
        changes: &DeveloperChanges,
    ) -> Result<Mutation<Developer>, DomainError> {
        let current = match self.repo.find_by_id(id).await? {
            Some(d) => d,
            None => return Ok(Mutation::NotApplicable),
        };

        let merged = self.repo.merge(current, changes);
        let saved = self.repo.save(&merged).await?;

        tracing::info!("Updated Developer: {}", saved.id);

        Ok(Mutation::Applied(saved))
    }

    /// Delete a Developer, returning it as it was before deletion
    pub async fn remove(&self, id: &str) -> Result<Mutation<Developer>, DomainError> {
        let current = match self.repo.find_by_id(id).await? {
            Some(d) => d,
            None => return Ok(Mutation::NotApplicable),
        };

        let removed = self.repo.remove(current).await?;

        tracing::info!("Deleted Developer: {}", removed.id);

        Ok(Mutation::Applied(removed))
    }
}
