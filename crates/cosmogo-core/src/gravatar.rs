//! Gravatar avatar URLs.

use std::fmt::Write;

use md5::{Digest, Md5};

/// Gravatar host.
pub const HOST: &str = "https://gravatar.com";

/// Default avatar size in pixels.
pub const DEFAULT_SIZE: u32 = 40;

/// Build the avatar URL for an email address.
///
/// The address is lowercased, not trimmed, before hashing. `default` is the
/// fallback image (`"identicon"`, `"mp"`, a URL, ...).
pub fn gravatar_url(email: &str, size: u32, default: Option<&str>) -> String {
    let digest = Md5::digest(email.to_lowercase().as_bytes());
    let mut url = format!("{HOST}/avatar/{}?s={size}", hex::encode(digest));

    if let Some(default) = default.filter(|d| !d.is_empty()) {
        url.push_str("&d=");
        url.push_str(&quote_plus(default));
    }

    url
}

/// Form-encode a query value.
fn quote_plus(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
