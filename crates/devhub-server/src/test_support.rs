//! Shared fixtures and stub repositories for unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use devhub::{Developer, DeveloperChanges, DeveloperRepository, DomainError, NewDeveloper};

use crate::adapters::InMemoryDeveloperRepository;
use crate::application::DeveloperService;
use crate::AppState;

pub fn developers_list() -> Vec<Developer> {
    vec![
        Developer {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        },
        Developer {
            id: "2".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1992, 2, 2).unwrap(),
        },
    ]
}

pub fn new_developer_fields() -> NewDeveloper {
    NewDeveloper {
        name: "New Developer".to_string(),
        email: "new.dev@example.com".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 3).unwrap(),
    }
}

/// Repository whose every storage call fails, as an unreachable database would
pub struct FailingDeveloperRepository;

#[async_trait]
impl DeveloperRepository for FailingDeveloperRepository {
    async fn save(&self, _developer: &Developer) -> Result<Developer, DomainError> {
        Err(DomainError::Repository("connection refused".to_string()))
    }

    async fn find(&self) -> Result<Vec<Developer>, DomainError> {
        Err(DomainError::Repository("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Developer>, DomainError> {
        Err(DomainError::Repository("connection refused".to_string()))
    }

    async fn remove(&self, _developer: Developer) -> Result<Developer, DomainError> {
        Err(DomainError::Repository("connection refused".to_string()))
    }
}

/// One call made against a `RecordingDeveloperRepository`
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall {
    Create(NewDeveloper),
    Merge(Developer, DeveloperChanges),
    Save(Developer),
    Find,
    FindById(String),
    Remove(Developer),
}

/// In-memory repository that logs every call and assigns `RECORDED_ID` on create
pub struct RecordingDeveloperRepository {
    inner: InMemoryDeveloperRepository,
    calls: Mutex<Vec<RepositoryCall>>,
}

pub const RECORDED_ID: &str = "recorded-id";

impl RecordingDeveloperRepository {
    pub fn with_developers(developers: Vec<Developer>) -> Self {
        Self {
            inner: InMemoryDeveloperRepository::with_developers(developers),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RepositoryCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DeveloperRepository for RecordingDeveloperRepository {
    fn create(&self, fields: NewDeveloper) -> Developer {
        self.record(RepositoryCall::Create(fields.clone()));
        Developer::new(RECORDED_ID.to_string(), fields)
    }

    fn merge(&self, developer: Developer, changes: &DeveloperChanges) -> Developer {
        self.record(RepositoryCall::Merge(developer.clone(), changes.clone()));
        developer.apply(changes)
    }

    async fn save(&self, developer: &Developer) -> Result<Developer, DomainError> {
        self.record(RepositoryCall::Save(developer.clone()));
        self.inner.save(developer).await
    }

    async fn find(&self) -> Result<Vec<Developer>, DomainError> {
        self.record(RepositoryCall::Find);
        self.inner.find().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Developer>, DomainError> {
        self.record(RepositoryCall::FindById(id.to_string()));
        self.inner.find_by_id(id).await
    }

    async fn remove(&self, developer: Developer) -> Result<Developer, DomainError> {
        self.record(RepositoryCall::Remove(developer.clone()));
        self.inner.remove(developer).await
    }
}

pub fn state_with(repo: Arc<dyn DeveloperRepository>) -> AppState {
    AppState {
        developer_service: Arc::new(DeveloperService::new(repo)),
    }
}

/// AppState backed by an in-memory repository seeded with `developers_list()`
pub fn seeded_state() -> AppState {
    state_with(Arc::new(InMemoryDeveloperRepository::with_developers(
        developers_list(),
    )))
}
