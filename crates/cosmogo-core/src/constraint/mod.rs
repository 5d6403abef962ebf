//! Unique constraint violation translation.
//!
//! To atomically create a record with unique fields you insert it and catch
//! the constraint violation. The storage engine reports the violation as
//! free text that does not name the offending field in a structured way.
//! This module extracts the field (and the duplicate value when the engine
//! reports it) and turns the violation into a [`ValidationError`] that can
//! be shown next to the matching form field.

mod engine;
mod error;
mod message;
#[cfg(feature = "sqlite")]
mod sqlite;
mod store;
mod translator;

pub use engine::Engine;
pub use error::{DuplicateParams, FieldError, ValidationError, WriteError, DUPLICATE_CODE};
pub use message::FieldMessage;
pub use store::{ConstraintViolation, SavepointStore};
pub use translator::ConstraintErrorTranslator;
