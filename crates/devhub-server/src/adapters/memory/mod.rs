//! In-memory Repository Implementations

mod developer_repository;

pub use developer_repository::InMemoryDeveloperRepository;
