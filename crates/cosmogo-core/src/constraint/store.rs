//! Storage seams used by protected writes.

use super::Engine;

/// Errors that may carry a constraint violation.
pub trait ConstraintViolation {
    /// The engine's violation text, or `None` for any other error.
    fn constraint_violation(&self) -> Option<String>;
}

/// A store able to run a unit of work inside a savepoint.
///
/// Implementations must roll the savepoint back before returning an error,
/// leaving the enclosing transaction usable.
pub trait SavepointStore {
    /// Handle passed to the unit of work.
    type Handle: ?Sized;

    /// Store error type.
    type Error: std::error::Error + ConstraintViolation + 'static;

    /// Engine behind the store.
    fn engine(&self) -> Engine;

    /// Run `work` inside a savepoint: release on success, roll back on error.
    fn savepoint<T, F>(&mut self, work: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&Self::Handle) -> Result<T, Self::Error>;
}
