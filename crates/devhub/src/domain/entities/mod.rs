//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Developer: registered developer record
//! - NewDeveloper / DeveloperChanges: creation and partial update inputs

mod developer;

pub use developer::*;
