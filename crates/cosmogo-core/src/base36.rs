//! Base36 encoding of non-negative integers.
//!
//! Values are written with the digits `0-9` followed by the uppercase
//! letters `A-Z`. Decoding is case-insensitive.

use thiserror::Error;

/// The default base36 alphabet. The index of a character is its digit value.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const RADIX: u128 = 36;

/// Base36 codec errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base36Error {
    /// Attempted to encode a negative value.
    #[error("value must be non-negative, got {0}")]
    Negative(i128),

    /// Custom alphabet with the wrong number of characters.
    #[error("alphabet must contain exactly 36 characters, got {0}")]
    AlphabetLength(usize),

    /// Nothing to decode.
    #[error("cannot decode an empty string")]
    Empty,

    /// Character outside the base36 alphabet.
    #[error("invalid base36 digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    /// Decoded value does not fit in 128 bits.
    #[error("base36 value is too large")]
    Overflow,
}

/// Encode a value with the default alphabet.
pub fn encode(value: u128) -> String {
    let alphabet: Vec<char> = ALPHABET.chars().collect();
    encode_chars(value, &alphabet)
}

/// Encode a signed value, rejecting negatives.
pub fn encode_signed(value: i128) -> Result<String, Base36Error> {
    let value = u128::try_from(value).map_err(|_| Base36Error::Negative(value))?;
    Ok(encode(value))
}

/// Encode a value with a custom 36 character alphabet.
pub fn encode_with(value: u128, alphabet: &str) -> Result<String, Base36Error> {
    let alphabet: Vec<char> = alphabet.chars().collect();
    if alphabet.len() != RADIX as usize {
        return Err(Base36Error::AlphabetLength(alphabet.len()));
    }
    Ok(encode_chars(value, &alphabet))
}

fn encode_chars(mut value: u128, alphabet: &[char]) -> String {
    if value == 0 {
        return alphabet[0].to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(alphabet[(value % RADIX) as usize]);
        value /= RADIX;
    }

    digits.iter().rev().collect()
}

/// Decode a base36 string. Surrounding whitespace is ignored.
pub fn decode(value: &str) -> Result<u128, Base36Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Base36Error::Empty);
    }

    value
        .chars()
        .enumerate()
        .try_fold(0u128, |acc, (position, digit)| {
            let digit_value = digit
                .to_digit(RADIX as u32)
                .ok_or(Base36Error::InvalidDigit { digit, position })?;

            acc.checked_mul(RADIX)
                .and_then(|acc| acc.checked_add(u128::from(digit_value)))
                .ok_or(Base36Error::Overflow)
        })
}
