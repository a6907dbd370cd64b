//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations on top of the repository ports.

mod developer_service;

pub use developer_service::DeveloperService;
