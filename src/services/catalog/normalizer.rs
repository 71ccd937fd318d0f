//! Join-key normalization shared by catalog display names and sheet cells.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for stripping non-alphanumeric characters.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Invalid regex"));

/// Canonicalize free text into the join key both naming domains meet at.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters via deunicode, so an accented
///    display name and its plain-ASCII spreadsheet spelling agree
/// 2. Strip non-alphanumeric symbols (whitespace kept)
/// 3. Lowercase, split on whitespace, rejoin with single spaces
///
/// Idempotent: re-normalizing a key returns the same key.
pub fn normalize_name(text: &str) -> String {
    let latin = deunicode(text);
    let clean = RE_NON_ALNUM.replace_all(&latin, "");
    clean
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
