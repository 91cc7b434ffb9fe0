use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use tracing::debug;

// A single path segment: unreserved characters plus `$ & + : = @` stay literal
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

// A `%` and, when present, the two hex digits that complete it
static PERCENT_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%(?:[0-9A-Fa-f]{2})?").expect("Invalid escape regex"));

/// Percent-encodes a string so it can be used as a path segment
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, PATH_SEGMENT).to_string()
}

/// Decodes a percent-encoded query component, reading `+` as space
///
/// A `%` must be followed by two hex digits and the decoded bytes must be
/// UTF-8.
pub fn percent_decode(input: &str) -> Result<String> {
    if let Some(position) = invalid_escape(input) {
        debug!("Invalid percent escape at byte {} of '{}'", position, input);
        bail!("Error decoding {}", input);
    }

    let spaced = input.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).with_context(|| format!("Error decoding {}", input))?;
    Ok(decoded.into_owned())
}

fn invalid_escape(input: &str) -> Option<usize> {
    PERCENT_ESCAPE
        .find_iter(input)
        .find(|escape| escape.len() != 3)
        .map(|escape| escape.start())
}
