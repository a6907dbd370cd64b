//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod mutation;

pub use mutation::*;
