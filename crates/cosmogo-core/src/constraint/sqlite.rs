//! SQLite store backed by `rusqlite`.

use rusqlite::{Connection, ErrorCode};

use super::{ConstraintViolation, Engine, SavepointStore};

impl ConstraintViolation for rusqlite::Error {
    fn constraint_violation(&self) -> Option<String> {
        match self {
            rusqlite::Error::SqliteFailure(error, message)
                if error.code == ErrorCode::ConstraintViolation =>
            {
                Some(message.clone().unwrap_or_else(|| error.to_string()))
            }
            _ => None,
        }
    }
}

impl SavepointStore for Connection {
    type Handle = Connection;
    type Error = rusqlite::Error;

    fn engine(&self) -> Engine {
        Engine::Sqlite
    }

    fn savepoint<T, F>(&mut self, work: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&Self::Handle) -> Result<T, Self::Error>,
    {
        tracing::trace!("entering savepoint");

        // Dropping the savepoint without committing rolls it back.
        let savepoint = Connection::savepoint(self)?;
        let value = work(&*savepoint)?;
        savepoint.commit()?;
        Ok(value)
    }
}
