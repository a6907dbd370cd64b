//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod developer_repository;

pub use developer_repository::*;
