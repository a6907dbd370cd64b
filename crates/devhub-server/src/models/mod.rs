//! Devhub Data Models
//!
//! - Developer: request/response DTOs for the registry API

mod developer;

pub use developer::*;
