//! Per-field messages for translated violations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Message configured for a field.
///
/// Templates may use `%(field)s`, `%(value)s` and `%(<field name>)s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessage {
    /// Used for every violation on the field.
    Literal(String),
    /// Looked up by error code, e.g. `duplicate-email`.
    ByCode(BTreeMap<String, String>),
}

impl FieldMessage {
    /// Resolve the message for an error code.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        match self {
            Self::Literal(message) => Some(message.as_str()),
            Self::ByCode(messages) => messages.get(code).map(String::as_str),
        }
    }
}

impl From<&str> for FieldMessage {
    fn from(message: &str) -> Self {
        Self::Literal(message.to_string())
    }
}

impl From<String> for FieldMessage {
    fn from(message: String) -> Self {
        Self::Literal(message)
    }
}

impl From<BTreeMap<String, String>> for FieldMessage {
    fn from(messages: BTreeMap<String, String>) -> Self {
        Self::ByCode(messages)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FieldMessage {
    fn from(messages: [(K, V); N]) -> Self {
        Self::ByCode(
            messages
                .into_iter()
                .map(|(code, message)| (code.into(), message.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_ignores_code() {
        let message = FieldMessage::from("taken");
        assert_eq!(message.resolve("duplicate-email"), Some("taken"));
        assert_eq!(message.resolve("anything"), Some("taken"));
    }

    #[test]
    fn test_by_code() {
        let message = FieldMessage::from([("duplicate-email", "Email is taken")]);
        assert_eq!(message.resolve("duplicate-email"), Some("Email is taken"));
        assert_eq!(message.resolve("duplicate-username"), None);
    }

    #[test]
    fn test_deserialize_either_shape() {
        let literal: FieldMessage = serde_json::from_str(r#""taken""#).unwrap();
        assert_eq!(literal, FieldMessage::from("taken"));

        let by_code: FieldMessage =
            serde_json::from_str(r#"{"duplicate-email": "taken"}"#).unwrap();
        assert_eq!(by_code, FieldMessage::from([("duplicate-email", "taken")]));
    }
}
