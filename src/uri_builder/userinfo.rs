use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

// Unreserved characters plus the sub-delimiters allowed in user and password.
// `:`, `@`, `/` and `?` are always escaped.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Username and optional password of an authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Userinfo {
    pub username: String,
    pub password: String,
}

impl fmt::Display for Userinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", utf8_percent_encode(&self.username, USERINFO))?;
        if !self.password.is_empty() {
            write!(f, ":{}", utf8_percent_encode(&self.password, USERINFO))?;
        }
        Ok(())
    }
}

/// Splits `user[:password]` into its parts
///
/// Only the first two colon-separated segments are used; anything after a
/// second colon is dropped. Returns `None` for empty input.
pub fn compose_userinfo(raw: &str) -> Option<Userinfo> {
    if raw.is_empty() {
        return None;
    }

    let mut parts = raw.split(':');
    let username = parts.next().unwrap_or_default().to_owned();
    let password = parts.next().unwrap_or_default().to_owned();

    Some(Userinfo { username, password })
}
