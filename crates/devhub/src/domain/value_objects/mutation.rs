//! Mutation - Outcome of an existence-checked write

/// Result of an update/remove addressed by id
///
/// `NotApplicable` means the target id did not exist; lookups that find
/// nothing use `Option::None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<T> {
    /// The target existed and the write went through
    Applied(T),
    /// The target id did not exist, nothing was written
    NotApplicable,
}
