//! Text helpers: template interpolation, enumerations and slugs.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `first and second`.
pub const CONJUNCTION_AND: &str = "%(first)s and %(second)s";

/// `first or second`.
pub const CONJUNCTION_OR: &str = "%(first)s or %(second)s";

/// Delimiter between all but the last enumerated word.
pub const DELIMITER: &str = ", ";

/// German characters replaced before slugifying.
pub const TRANSLITERATIONS: &[(&str, &str)] = &[("ä", "ae"), ("ö", "oe"), ("ü", "ue"), ("ß", "ss")];

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\((\w+)\)s").expect("placeholder pattern is valid"));

static SLUG_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("slug strip pattern is valid"));

static SLUG_HYPHENATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("slug hyphenate pattern is valid"));

/// Replace `%(name)s` placeholders. Unknown names are left untouched.
pub fn interpolate(template: &str, params: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |captures: &Captures<'_>| match params.get(&captures[1]) {
            Some(value) => value.clone(),
            None => captures[0].to_string(),
        })
        .into_owned()
}

/// Join words into a human enumeration: `a, b and c`.
pub fn enumeration<I, S>(words: I, conjunction: &str, delimiter: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();

    let Some(second) = words.pop() else {
        return String::new();
    };

    if words.is_empty() {
        return second;
    }

    let params = BTreeMap::from([
        ("first".to_string(), words.join(delimiter)),
        ("second".to_string(), second),
    ]);
    interpolate(conjunction, &params)
}

/// Replace characters according to a transliteration table.
pub fn transliterate<'a>(value: &'a str, table: &[(&str, &str)]) -> Cow<'a, str> {
    let mut value = Cow::Borrowed(value);
    for &(character, replacement) in table {
        if value.contains(character) {
            value = Cow::Owned(value.replace(character, replacement));
        }
    }
    value
}

/// Build a lowercase ASCII slug.
///
/// German umlauts are transliterated first; any other non-ASCII character is
/// dropped.
pub fn slugify(value: &str) -> String {
    slugify_with(value, TRANSLITERATIONS)
}

/// [`slugify`] with a custom transliteration table.
pub fn slugify_with(value: &str, table: &[(&str, &str)]) -> String {
    let ascii: String = transliterate(value, table)
        .chars()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_lowercase();

    let stripped = SLUG_STRIP.replace_all(&ascii, "");
    SLUG_HYPHENATE
        .replace_all(&stripped, "-")
        .trim_matches(&['-', '_'][..])
        .to_string()
}
