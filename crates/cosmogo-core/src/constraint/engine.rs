//! Storage engines with known constraint violation formats.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static POSTGRESQL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)Key \((?P<field>.+)\)=\((?P<value>.+)\) already exists\.")
        .expect("postgresql pattern is valid")
});

static SQLITE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)UNIQUE constraint failed: (?P<table>.+)\.(?P<field>.+)")
        .expect("sqlite pattern is valid")
});

/// The storage engine behind a connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// PostgreSQL, reports `Key (field)=(value) already exists.`
    Postgresql,
    /// SQLite, reports `UNIQUE constraint failed: table.field`
    Sqlite,
    /// Any other engine. Violations cannot be attributed to a field.
    Unsupported(String),
}

impl Engine {
    /// Resolve an engine from its vendor name (`"postgresql"`, `"sqlite"`, ...).
    pub fn from_vendor(vendor: &str) -> Self {
        match vendor.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Self::Postgresql,
            "sqlite" | "sqlite3" => Self::Sqlite,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Vendor name of this engine.
    pub fn vendor(&self) -> &str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::Unsupported(vendor) => vendor,
        }
    }

    /// The pattern extracting the field (and maybe the value) from a violation.
    pub(crate) fn pattern(&self) -> Option<&'static Regex> {
        match self {
            Self::Postgresql => Some(&*POSTGRESQL_PATTERN),
            Self::Sqlite => Some(&*SQLITE_PATTERN),
            Self::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vendor())
    }
}
