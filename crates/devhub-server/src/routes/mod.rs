//! Devhub API Routes
//!
//! - /developers - Developer registry (create, list)
//! - /developers/:id - Developer registry (get, patch, delete)

pub mod developer;
pub mod swagger;
