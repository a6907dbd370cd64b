//! Devhub Domain Library
//!
//! Core domain types and interfaces for the Devhub developer registry.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Developer and its creation / partial update inputs
//!   - `value_objects/`: `Mutation` outcome of existence-checked writes
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use devhub::{Developer, DeveloperRepository, Mutation};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Developer, DeveloperChanges, DomainError, Mutation, NewDeveloper};
pub use ports::DeveloperRepository;
