//! Translation of violation text into validation errors.

use std::collections::BTreeMap;

use super::{
    ConstraintViolation, DuplicateParams, Engine, FieldError, FieldMessage, SavepointStore,
    ValidationError, WriteError, DUPLICATE_CODE,
};

/// Translates unique constraint violations into field validation errors.
///
/// ```
/// use cosmogo_core::{ConstraintErrorTranslator, Engine};
///
/// let translator = ConstraintErrorTranslator::new(Engine::Postgresql)
///     .with_message("email", "This email is taken");
///
/// let error = translator.translate("Key (email)=(a@b.com) already exists.");
/// assert_eq!(error.field(), Some("email"));
/// assert_eq!(error.code(), "duplicate-email");
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintErrorTranslator {
    engine: Engine,
    messages: BTreeMap<String, FieldMessage>,
    values: BTreeMap<String, String>,
}

impl ConstraintErrorTranslator {
    /// Create a translator for the given engine.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            messages: BTreeMap::new(),
            values: BTreeMap::new(),
        }
    }

    /// Create a translator for the engine behind a store.
    pub fn for_store<S: SavepointStore>(store: &S) -> Self {
        Self::new(store.engine())
    }

    /// Set the message of a field.
    pub fn with_message(mut self, field: impl Into<String>, message: impl Into<FieldMessage>) -> Self {
        self.messages.insert(field.into(), message.into());
        self
    }

    /// Set the messages of several fields.
    pub fn with_messages<I, K, M>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<FieldMessage>,
    {
        self.messages.extend(
            messages
                .into_iter()
                .map(|(field, message)| (field.into(), message.into())),
        );
        self
    }

    /// Set the value shown for a field when the engine does not report it.
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Engine this translator parses violations for.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Translate violation text into a validation error.
    pub fn translate(&self, error: &str) -> ValidationError {
        let captures = self
            .engine
            .pattern()
            .and_then(|pattern| pattern.captures(error));

        let Some(captures) = captures else {
            tracing::debug!(
                engine = %self.engine,
                "constraint violation not attributable to a field"
            );
            return ValidationError::Generic {
                code: DUPLICATE_CODE.to_string(),
                message: error.to_string(),
            };
        };

        let field = captures["field"].to_string();
        let value = captures
            .name("value")
            .map(|value| value.as_str().to_string())
            .or_else(|| self.values.get(&field).cloned());

        let code = format!("{DUPLICATE_CODE}-{field}");
        let message = self
            .messages
            .get(&field)
            .and_then(|message| message.resolve(&code))
            .map(str::to_string);

        tracing::debug!(
            engine = %self.engine,
            field = %field,
            code = %code,
            "translated constraint violation"
        );

        ValidationError::Field {
            field: field.clone(),
            error: FieldError {
                code,
                message,
                params: DuplicateParams { field, value },
            },
        }
    }

    /// Run a write inside a savepoint, translating constraint violations.
    ///
    /// The savepoint is rolled back before translation. Errors that are not
    /// constraint violations are returned unchanged as [`WriteError::Store`].
    pub fn protect<S, T, F>(&self, store: &mut S, work: F) -> Result<T, WriteError<S::Error>>
    where
        S: SavepointStore,
        F: FnOnce(&S::Handle) -> Result<T, S::Error>,
    {
        store.savepoint(work).map_err(|error| match error.constraint_violation() {
            Some(text) => WriteError::Validation(self.translate(&text)),
            None => WriteError::Store(error),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_postgresql_field_and_value() {
        let translator = ConstraintErrorTranslator::new(Engine::Postgresql)
            .with_message("email", "This email is taken");

        let error = translator.translate("Key (email)=(a@b.com) already exists.");

        assert_eq!(
            error,
            ValidationError::Field {
                field: "email".to_string(),
                error: FieldError {
                    code: "duplicate-email".to_string(),
                    message: Some("This email is taken".to_string()),
                    params: DuplicateParams {
                        field: "email".to_string(),
                        value: Some("a@b.com".to_string()),
                    },
                },
            }
        );
    }

    #[test]
    fn test_postgresql_full_driver_message() {
        let translator = ConstraintErrorTranslator::new(Engine::Postgresql);
        let text = "duplicate key value violates unique constraint \"users_email_key\"\n\
                    DETAIL:  Key (email)=(a@b.com) already exists.";

        let error = translator.translate(text);
        assert_eq!(error.field(), Some("email"));
        assert_eq!(error.params().unwrap().value.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_postgresql_is_case_insensitive() {
        let translator = ConstraintErrorTranslator::new(Engine::Postgresql);
        let error = translator.translate("key (slug)=(home) ALREADY EXISTS.");
        assert_eq!(error.code(), "duplicate-slug");
    }

    #[test]
    fn test_sqlite_field_without_value() {
        let translator = ConstraintErrorTranslator::new(Engine::Sqlite);

        let error = translator.translate("UNIQUE constraint failed: users.username");

        assert_eq!(error.field(), Some("username"));
        assert_eq!(error.code(), "duplicate-username");
        assert_eq!(error.message(), None);
        assert_eq!(
            error.params(),
            Some(&DuplicateParams {
                field: "username".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn test_sqlite_value_override() {
        let translator = ConstraintErrorTranslator::new(Engine::Sqlite)
            .with_message("username", "%(value)s is taken")
            .with_value("username", "jane");

        let error = translator.translate("UNIQUE constraint failed: users.username");

        assert_eq!(error.params().unwrap().value.as_deref(), Some("jane"));
        assert_eq!(error.message().as_deref(), Some("jane is taken"));
    }

    #[test]
    fn test_reported_value_wins_over_override() {
        let translator =
            ConstraintErrorTranslator::new(Engine::Postgresql).with_value("email", "fallback");

        let error = translator.translate("Key (email)=(a@b.com) already exists.");
        assert_eq!(error.params().unwrap().value.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_message_by_code() {
        let translator = ConstraintErrorTranslator::new(Engine::Sqlite).with_messages([
            ("email", FieldMessage::from([("duplicate-email", "Email in use")])),
            ("username", FieldMessage::from([("other-code", "unused")])),
        ]);

        let email = translator.translate("UNIQUE constraint failed: users.email");
        assert_eq!(email.message().as_deref(), Some("Email in use"));

        let username = translator.translate("UNIQUE constraint failed: users.username");
        assert_eq!(username.message(), None);
    }

    #[test]
    fn test_unsupported_engine_is_generic() {
        let translator = ConstraintErrorTranslator::new(Engine::from_vendor("mysql"))
            .with_message("email", "taken");
        let text = "Duplicate entry 'a@b.com' for key 'email'";

        let error = translator.translate(text);

        assert_eq!(
            error,
            ValidationError::Generic {
                code: "duplicate".to_string(),
                message: text.to_string(),
            }
        );
    }

    #[test]
    fn test_unmatched_text_is_generic() {
        let translator = ConstraintErrorTranslator::new(Engine::Sqlite);
        let text = "NOT NULL constraint failed: users.email";

        let error = translator.translate(text);
        assert_eq!(error.code(), "duplicate");
        assert_eq!(error.field(), None);
        assert_eq!(error.message().as_deref(), Some(text));
    }
}
