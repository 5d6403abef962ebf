//! Yes/no answer parsing and confirmation prompts.

use std::io::{self, BufRead, Write};

const YES_NO: &[(&str, bool)] = &[
    ("y", true),
    ("Y", true),
    ("yes", true),
    ("YES", true),
    ("n", false),
    ("N", false),
    ("no", false),
    ("NO", false),
];

const ZERO_ONE: &[(&str, bool)] = &[("1", true), ("0", false)];

const TRUE_FALSE: &[(&str, bool)] = &[
    ("TRUE", true),
    ("True", true),
    ("true", true),
    ("t", true),
    ("FALSE", false),
    ("False", false),
    ("false", false),
    ("f", false),
];

const ON_OFF: &[(&str, bool)] = &[("on", true), ("ON", true), ("off", false), ("OFF", false)];

/// Answer tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Truthy {
    /// `y`, `yes`, `n`, `no` (lower or upper case).
    #[default]
    YesNo,
    /// `1` and `0`.
    ZeroOne,
    /// `true`, `t`, `false`, `f` and capitalized forms.
    TrueFalse,
    /// `on` and `off`.
    OnOff,
    /// All of the above.
    Any,
}

impl Truthy {
    fn tables(self) -> &'static [&'static [(&'static str, bool)]] {
        match self {
            Self::YesNo => &[YES_NO],
            Self::ZeroOne => &[ZERO_ONE],
            Self::TrueFalse => &[TRUE_FALSE],
            Self::OnOff => &[ON_OFF],
            Self::Any => &[YES_NO, ZERO_ONE, TRUE_FALSE, ON_OFF],
        }
    }

    /// Look up an answer. Case variants not listed in the table are unknown.
    pub fn lookup(self, response: &str) -> Option<bool> {
        self.tables()
            .iter()
            .flat_map(|table| table.iter())
            .find(|(answer, _)| *answer == response)
            .map(|(_, value)| *value)
    }
}

/// Ask a question and read a yes/no answer.
///
/// Unknown or empty answers return `default`.
pub fn confirm<R, W>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    default: bool,
    truthy: Truthy,
) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{question}")?;
    writer.flush()?;

    let mut response = String::new();
    reader.read_line(&mut response)?;

    Ok(truthy.lookup(response.trim()).unwrap_or(default))
}
