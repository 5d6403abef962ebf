//! Random identifiers split into delimited groups.
//!
//! Identifiers are meant to be typed by humans (voucher codes, short
//! reference numbers), so the default alphabet leaves out characters that
//! are easily confused with each other. The generator gives no uniqueness
//! guarantee; callers that persist identifiers must handle collisions.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters removed from the default alphabet.
pub const CONFUSABLE: [char; 5] = ['0', 'O', '1', 'I', 'l'];

/// Uppercase letters and digits without [`CONFUSABLE`], sorted.
pub const DEFAULT_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Default number of groups.
pub const DEFAULT_GROUPS: usize = 4;

/// Default number of characters per group.
pub const DEFAULT_GROUP_LENGTH: usize = 4;

/// Default group delimiter.
pub const DEFAULT_DELIMITER: &str = "-";

/// Identifier configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// At least one group is required.
    #[error("identifier needs at least one group")]
    NoGroups,

    /// Groups must contain at least one character.
    #[error("identifier groups need at least one character")]
    EmptyGroup,

    /// Nothing to draw characters from.
    #[error("identifier alphabet is empty")]
    EmptyAlphabet,

    /// Repeated characters would bias the distribution.
    #[error("identifier alphabet contains {0:?} more than once")]
    DuplicateCharacter(char),

    /// Groups could not be told apart from delimiters.
    #[error("identifier delimiter contains alphabet character {0:?}")]
    DelimiterInAlphabet(char),

    /// Identifier length does not fit in `usize`.
    #[error("identifier of {groups} groups of {group_length} characters is too long")]
    TooLong { groups: usize, group_length: usize },
}

/// Shape of generated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Number of groups.
    pub groups: usize,

    /// Characters per group.
    pub group_length: usize,

    /// String placed between groups.
    pub delimiter: String,

    /// Characters to draw from.
    pub alphabet: String,
}

impl IdentifierConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of groups.
    pub fn with_groups(mut self, groups: usize) -> Self {
        self.groups = groups;
        self
    }

    /// Set the number of characters per group.
    pub fn with_group_length(mut self, group_length: usize) -> Self {
        self.group_length = group_length;
        self
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the alphabet.
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            groups: DEFAULT_GROUPS,
            group_length: DEFAULT_GROUP_LENGTH,
            delimiter: DEFAULT_DELIMITER.to_string(),
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

/// Generator for grouped identifiers.
#[derive(Debug, Clone)]
pub struct IdentifierGenerator {
    groups: usize,
    group_length: usize,
    delimiter: String,
    alphabet: Vec<char>,
}

impl IdentifierGenerator {
    /// Build a generator from a validated configuration.
    pub fn new(config: IdentifierConfig) -> Result<Self, IdentifierError> {
        if config.groups == 0 {
            return Err(IdentifierError::NoGroups);
        }
        if config.group_length == 0 {
            return Err(IdentifierError::EmptyGroup);
        }

        let alphabet: Vec<char> = config.alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(IdentifierError::EmptyAlphabet);
        }

        let mut seen = HashSet::with_capacity(alphabet.len());
        if let Some(duplicate) = alphabet.iter().find(|c| !seen.insert(**c)) {
            return Err(IdentifierError::DuplicateCharacter(*duplicate));
        }

        if let Some(shared) = config.delimiter.chars().find(|c| seen.contains(c)) {
            return Err(IdentifierError::DelimiterInAlphabet(shared));
        }

        if shape_length(config.groups, config.group_length, config.delimiter.chars().count())
            .is_none()
        {
            return Err(IdentifierError::TooLong {
                groups: config.groups,
                group_length: config.group_length,
            });
        }

        Ok(Self {
            groups: config.groups,
            group_length: config.group_length,
            delimiter: config.delimiter,
            alphabet,
        })
    }

    /// Number of groups.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Characters per group.
    pub fn group_length(&self) -> usize {
        self.group_length
    }

    /// Group delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Characters identifiers are drawn from.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Length of every generated identifier, in characters.
    pub fn total_length(&self) -> usize {
        // checked in `new`
        shape_length(self.groups, self.group_length, self.delimiter.chars().count())
            .unwrap_or(usize::MAX)
    }

    /// Number of distinct identifiers, or `None` if it exceeds `u128`.
    pub fn space_size(&self) -> Option<u128> {
        let positions = u32::try_from(self.groups.checked_mul(self.group_length)?).ok()?;
        (self.alphabet.len() as u128).checked_pow(positions)
    }

    /// Generate an identifier using the thread-local CSPRNG.
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate an identifier from the given source of randomness.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut identifier = String::with_capacity(self.total_length());

        for group in 0..self.groups {
            if group > 0 {
                identifier.push_str(&self.delimiter);
            }
            for _ in 0..self.group_length {
                identifier.push(self.alphabet[rng.gen_range(0..self.alphabet.len())]);
            }
        }

        identifier
    }

    /// Check whether `candidate` has the shape and alphabet of this generator.
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.chars().count() != self.total_length() {
            return false;
        }

        let parts: Vec<&str> = if self.delimiter.is_empty() {
            vec![candidate]
        } else {
            candidate.split(self.delimiter.as_str()).collect()
        };

        let expected_parts = if self.delimiter.is_empty() { 1 } else { self.groups };
        parts.len() == expected_parts
            && parts.iter().all(|part| {
                part.chars().count() * expected_parts == self.groups * self.group_length
                    && part.chars().all(|c| self.alphabet.contains(&c))
            })
    }
}

fn shape_length(groups: usize, group_length: usize, delimiter_length: usize) -> Option<usize> {
    groups
        .checked_mul(group_length)?
        .checked_add(groups.checked_sub(1)?.checked_mul(delimiter_length)?)
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self {
            groups: DEFAULT_GROUPS,
            group_length: DEFAULT_GROUP_LENGTH,
            delimiter: DEFAULT_DELIMITER.to_string(),
            alphabet: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}
