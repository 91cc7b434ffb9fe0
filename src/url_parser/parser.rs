use anyhow::{Context, Result};
use fluent_uri::IriRef;
use percent_encoding::percent_decode_str;
use tracing::{debug, instrument};

use crate::uri_builder::QueryParams;

/// A URL string broken into its components
///
/// Components are kept as written: no case folding, no dot-segment removal,
/// no IDNA conversion and no default-port elision. Relative references such as
/// `//host/path` or `/path?q` are accepted and leave the scheme empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub opaque: String,             // only for non-hierarchical URLs
    pub userinfo: String,           // decoded user[:password]
    pub host: String,               // IPv6 literals without brackets
    pub port: String,
    pub path: String,
    pub escaped_path: String,
    pub fragment: String,
    pub escaped_fragment: String,
    pub raw_query: String,
    pub query: QueryParams,         // decoded, first-occurrence key order
}

impl ParsedUrl {
    /// Parses a URL or relative reference
    ///
    /// # Arguments
    /// * `input` - The URL string to parse
    ///
    /// # Returns
    /// * `Result<ParsedUrl>` - The components, or an error naming the input
    #[instrument(level = "debug", skip_all, fields(url = %input))]
    pub fn parse(input: &str) -> Result<Self> {
        let reference = match IriRef::parse(input) {
            Ok(reference) => reference,
            Err(e) => {
                debug!("Failed to parse URL '{}': {}", input, e);
                return Err(e).with_context(|| format!("Error parsing {}", input));
            }
        };

        let parsed = Self::from_reference(&reference);
        debug!("Parsed URL: {:?}", parsed);
        Ok(parsed)
    }

    fn from_reference(reference: &IriRef<&str>) -> Self {
        let scheme = reference.scheme().map(|s| s.as_str()).unwrap_or_default();
        let written_path = reference.path().as_str();

        // A scheme followed by anything but an authority or an absolute path
        // has no hierarchy to split.
        let is_opaque = !scheme.is_empty()
            && reference.authority().is_none()
            && !written_path.is_empty()
            && !written_path.starts_with('/');
        let (opaque, escaped_path) = if is_opaque {
            (written_path.to_owned(), String::new())
        } else {
            (String::new(), written_path.to_owned())
        };

        let (userinfo, host, port) = match reference.authority() {
            Some(authority) => (
                authority.userinfo().map(|u| decode(u.as_str())).unwrap_or_default(),
                hostname(authority.host()),
                authority.port().map(|p| p.as_str().to_owned()).unwrap_or_default(),
            ),
            None => Default::default(),
        };

        let raw_query = reference.query().map(|q| q.as_str()).unwrap_or_default().to_owned();
        let escaped_fragment = reference.fragment().map(|f| f.as_str()).unwrap_or_default().to_owned();

        ParsedUrl {
            scheme: scheme.to_owned(),
            opaque,
            userinfo,
            host,
            port,
            path: decode(&escaped_path),
            escaped_path,
            fragment: decode(&escaped_fragment),
            escaped_fragment,
            query: url::form_urlencoded::parse(raw_query.as_bytes()).collect(),
            raw_query,
        }
    }

    /// Query pairs as written, split but not decoded
    pub fn raw_query_pairs(&self) -> QueryParams {
        self.raw_query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect()
    }
}

fn hostname(host: &str) -> String {
    match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        Some(literal) => literal.to_owned(),
        None => decode(host),
    }
}

fn decode(escaped: &str) -> String {
    percent_decode_str(escaped).decode_utf8_lossy().into_owned()
}
