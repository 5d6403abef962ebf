//! Validation errors produced from constraint violations.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::interpolate;

/// Code of violations that cannot be attributed to a field.
pub const DUPLICATE_CODE: &str = "duplicate";

/// Parameters available to message templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateParams {
    /// Name of the offending field.
    pub field: String,
    /// The duplicate value, when known.
    pub value: Option<String>,
}

impl DuplicateParams {
    /// Template substitutions: `field`, `value` and the field name mapped to the value.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("field".to_string(), self.field.clone());
        if let Some(value) = &self.value {
            params.insert("value".to_string(), value.clone());
            params.insert(self.field.clone(), value.clone());
        }
        params
    }
}

/// A violation attributed to a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// `duplicate-<field>`.
    pub code: String,
    /// Message template, absent when none is configured for the field.
    pub message: Option<String>,
    /// Template parameters.
    pub params: DuplicateParams,
}

impl FieldError {
    /// The message with its parameters substituted.
    pub fn rendered_message(&self) -> Option<String> {
        self.message
            .as_deref()
            .map(|template| interpolate(template, &self.params.to_map()))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rendered_message() {
            Some(message) => f.write_str(&message),
            None => f.write_str(&self.code),
        }
    }
}

/// Validation error raised in place of a constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// The violation names a field.
    #[error("{field}: {error}")]
    Field { field: String, error: FieldError },

    /// The violation could not be attributed to a field.
    #[error("{message}")]
    Generic { code: String, message: String },
}

impl ValidationError {
    /// Error code (`duplicate-<field>` or `duplicate`).
    pub fn code(&self) -> &str {
        match self {
            Self::Field { error, .. } => &error.code,
            Self::Generic { code, .. } => code,
        }
    }

    /// The offending field, if known.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field.as_str()),
            Self::Generic { .. } => None,
        }
    }

    /// Rendered message. Field errors without a configured message have none.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Field { error, .. } => error.rendered_message(),
            Self::Generic { message, .. } => Some(message.clone()),
        }
    }

    /// Template parameters of a field error.
    pub fn params(&self) -> Option<&DuplicateParams> {
        match self {
            Self::Field { error, .. } => Some(&error.params),
            Self::Generic { .. } => None,
        }
    }
}

/// Outcome of a failed protected write.
#[derive(Debug, Error)]
pub enum WriteError<E>
where
    E: std::error::Error + 'static,
{
    /// A constraint violation, translated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Any other store error, unchanged.
    #[error(transparent)]
    Store(E),
}

impl<E> WriteError<E>
where
    E: std::error::Error + 'static,
{
    /// The validation error, if this was a constraint violation.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Store(_) => None,
        }
    }

    /// Consume into the validation error, if this was a constraint violation.
    pub fn into_validation(self) -> Option<ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Store(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn email_error(message: Option<&str>, value: Option<&str>) -> ValidationError {
        ValidationError::Field {
            field: "email".to_string(),
            error: FieldError {
                code: "duplicate-email".to_string(),
                message: message.map(str::to_string),
                params: DuplicateParams {
                    field: "email".to_string(),
                    value: value.map(str::to_string),
                },
            },
        }
    }

    #[test]
    fn test_params_map() {
        let params = DuplicateParams {
            field: "email".to_string(),
            value: Some("a@b.com".to_string()),
        };
        let map = params.to_map();
        assert_eq!(map["field"], "email");
        assert_eq!(map["value"], "a@b.com");
        assert_eq!(map["email"], "a@b.com");

        let params = DuplicateParams {
            field: "email".to_string(),
            value: None,
        };
        assert_eq!(params.to_map().len(), 1);
    }

    #[test]
    fn test_rendered_message() {
        let error = email_error(Some("%(value)s is already used"), Some("a@b.com"));
        assert_eq!(error.message().as_deref(), Some("a@b.com is already used"));
        assert_eq!(error.to_string(), "email: a@b.com is already used");
    }

    #[test]
    fn test_missing_value_leaves_placeholder() {
        let error = email_error(Some("%(value)s is already used"), None);
        assert_eq!(error.message().as_deref(), Some("%(value)s is already used"));
    }

    #[test]
    fn test_display_without_message_uses_code() {
        let error = email_error(None, None);
        assert_eq!(error.message(), None);
        assert_eq!(error.to_string(), "email: duplicate-email");
    }

    #[test]
    fn test_generic_accessors() {
        let error = ValidationError::Generic {
            code: DUPLICATE_CODE.to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(error.code(), "duplicate");
        assert_eq!(error.field(), None);
        assert_eq!(error.params(), None);
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn test_json_shape() {
        let error = email_error(Some("taken"), Some("a@b.com"));
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "field",
                "field": "email",
                "error": {
                    "code": "duplicate-email",
                    "message": "taken",
                    "params": {"field": "email", "value": "a@b.com"}
                }
            })
        );

        let back: ValidationError = serde_json::from_value(json).unwrap();
        assert_eq!(back, error);
    }

    #[test]
    fn test_write_error_accessors() {
        let error: WriteError<std::io::Error> = email_error(None, None).into();
        assert!(error.validation().is_some());
        assert_eq!(error.into_validation().unwrap().code(), "duplicate-email");

        let error: WriteError<std::io::Error> =
            WriteError::Store(std::io::Error::other("disk full"));
        assert!(error.validation().is_none());
        assert_eq!(error.to_string(), "disk full");
    }
}
