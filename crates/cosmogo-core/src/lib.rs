//! Cosmogo Core - small helpers shared by the application layer.
//!
//! This crate provides:
//! - Translation of unique constraint violations into field validation errors
//! - A base36 codec
//! - Grouped, confusable-free random identifiers
//! - Text, SQL, gravatar, confirmation and file timestamp helpers

pub mod base36;
pub mod constraint;
pub mod filepath;
pub mod gravatar;
pub mod identifier;
pub mod sql;
pub mod text;
pub mod truthy;

pub use base36::Base36Error;
pub use constraint::{
    ConstraintErrorTranslator, ConstraintViolation, DuplicateParams, Engine, FieldError,
    FieldMessage, SavepointStore, ValidationError, WriteError,
};
pub use gravatar::gravatar_url;
pub use identifier::{IdentifierConfig, IdentifierError, IdentifierGenerator};
pub use truthy::Truthy;
