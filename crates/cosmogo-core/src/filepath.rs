//! File modification timestamps.

use std::io;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};

/// Last modification time of a file, or `None` if it does not exist.
pub fn last_modified(path: impl AsRef<Path>) -> io::Result<Option<DateTime<Utc>>> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(DateTime::<Utc>::from(metadata.modified()?))),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error),
    }
}

/// Last modification time as unix seconds.
pub fn last_modified_timestamp(path: impl AsRef<Path>) -> io::Result<Option<i64>> {
    Ok(last_modified(path)?.map(|modified| modified.timestamp()))
}

/// Whether the file is missing or was last modified more than `max_age` ago.
pub fn is_outdated(path: impl AsRef<Path>, max_age: Duration) -> io::Result<bool> {
    Ok(match last_modified(path)? {
        Some(modified) => modified < Utc::now() - max_age,
        None => true,
    })
}
