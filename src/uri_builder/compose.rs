use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Write;
use tracing::{debug, instrument};

use super::host::normalize_host;
use super::input::ComponentInput;
use super::query::materialize_query;
use super::userinfo::compose_userinfo;

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// Path keeps the sub-delimiters plus `/`, `:` and `@`. `?` is escaped.
const PATH: &AsciiSet = &UNRESERVED
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

const FRAGMENT: &AsciiSet = &PATH
    .remove(b'?')
    .remove(b'!')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Builds a URL string from its components
///
/// Layout: `scheme:` then either the opaque path or
/// `//userinfo@host:port/path`, then `?query` and `#fragment`. Path and
/// fragment are escaped here; the opaque path, host and raw query are
/// written as given.
#[instrument(level = "debug", skip_all, fields(scheme = %input.scheme, host = %input.host))]
pub fn compose(input: &ComponentInput) -> String {
    let authority = normalize_host(&input.host, &input.port);
    let userinfo = compose_userinfo(&input.userinfo);
    let query = materialize_query(
        &input.raw_query,
        input.param_map.as_ref(),
        input.param_pairs.as_deref(),
    );

    let mut url = String::new();
    if !input.scheme.is_empty() {
        url.push_str(&input.scheme);
        url.push(':');
    }

    if !input.opaque_path.is_empty() {
        url.push_str(&input.opaque_path);
    } else {
        if !input.scheme.is_empty() || !authority.is_empty() || userinfo.is_some() {
            if !authority.is_empty() || !input.path.is_empty() || userinfo.is_some() {
                url.push_str("//");
            }
            if let Some(userinfo) = &userinfo {
                let _ = write!(url, "{}@", userinfo);
            }
            url.push_str(&authority);
        }

        let path = escape_path(&input.path);
        if !path.is_empty() && !path.starts_with('/') && !authority.is_empty() {
            url.push('/');
        }
        if url.is_empty() && first_segment_has_colon(&path) {
            // Would otherwise read back as a scheme
            url.push_str("./");
        }
        url.push_str(&path);
    }

    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    if !input.fragment.is_empty() {
        url.push('#');
        url.push_str(&utf8_percent_encode(&input.fragment, FRAGMENT).to_string());
    }

    debug!("Composed URL: {}", url);
    url
}

fn escape_path(path: &str) -> String {
    // `*` alone is the asterisk-form target and stays literal
    if path == "*" {
        return path.to_owned();
    }
    utf8_percent_encode(path, PATH).to_string()
}

fn first_segment_has_colon(path: &str) -> bool {
    match path.find(':') {
        Some(colon) => !path[..colon].contains('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_path() {
        assert_eq!(escape_path("/colorado/denver"), "/colorado/denver");
        assert_eq!(escape_path("/a b/c?d"), "/a%20b/c%3Fd");
        assert_eq!(escape_path("/über"), "/%C3%BCber");
        assert_eq!(escape_path("*"), "*");
    }

    #[test]
    fn test_first_segment_has_colon() {
        assert!(first_segment_has_colon("a:b"));
        assert!(!first_segment_has_colon("a/b:c"));
        assert!(!first_segment_has_colon("/a"));
    }
}
