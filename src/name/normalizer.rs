//! Canonical comparison keys for company names

use super::REGISTRATION_SUFFIXES;

/// Produce the normalized comparison key for a company name.
///
/// Lower-cases, removes one trailing registration suffix (first match in
/// [`REGISTRATION_SUFFIXES`] wins, and only as a whole trailing token), drops
/// every character that is not a letter, digit or whitespace, and trims.
/// The pass is repeated until the key stops changing, so the result is
/// always a fixed point: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(name: &str) -> String {
    let mut key = normalize_once(name);
    loop {
        let next = normalize_once(&key);
        if next == key {
            return key;
        }
        key = next;
    }
}

fn normalize_once(name: &str) -> String {
    let lowered = name.to_lowercase();
    let trimmed = lowered.trim();

    let without_suffix = strip_trailing_suffix(trimmed).unwrap_or(trimmed);

    without_suffix
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Remove the first registration suffix that ends `name` as a whole token.
fn strip_trailing_suffix(name: &str) -> Option<&str> {
    REGISTRATION_SUFFIXES.iter().find_map(|suffix| {
        let rest = name.strip_suffix(suffix)?;
        if rest.is_empty() || rest.ends_with(char::is_whitespace) {
            Some(rest.trim_end())
        } else {
            None
        }
    })
}
