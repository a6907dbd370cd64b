//! In-memory implementation of DeveloperRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use devhub::{Developer, DeveloperRepository, DomainError};

/// Process-local DeveloperRepository, ordered by insertion
#[derive(Default)]
pub struct InMemoryDeveloperRepository {
    developers: RwLock<Vec<Developer>>,
}

impl InMemoryDeveloperRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the given records
    #[cfg(test)]
    pub fn with_developers(developers: Vec<Developer>) -> Self {
        Self {
            developers: RwLock::new(developers),
        }
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn save(&self, developer: &Developer) -> Result<Developer, DomainError> {
        let mut developers = self.developers.write().await;
        match developers.iter_mut().find(|d| d.id == developer.id) {
            Some(existing) => *existing = developer.clone(),
            None => developers.push(developer.clone()),
        }
        Ok(developer.clone())
    }

    async fn find(&self) -> Result<Vec<Developer>, DomainError> {
        Ok(self.developers.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Developer>, DomainError> {
        let developers = self.developers.read().await;
        Ok(developers.iter().find(|d| d.id == id).cloned())
    }

    async fn remove(&self, developer: Developer) -> Result<Developer, DomainError> {
        self.developers.write().await.retain(|d| d.id != developer.id);
        Ok(developer)
    }
}
