use anyhow::Result;
use serde::Serialize;
use std::net::IpAddr;
use tracing::debug;

use super::parser::ParsedUrl;
use crate::codec::punycode_decode;
use crate::uri_builder::QueryParams;

/// A single component that can be selected for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Scheme,
    Opaque,
    User,
    Host,
    Port,
    Path,
    Fragment,
    Params,
}

impl Component {
    /// Label used when components are listed together
    pub fn label(self) -> &'static str {
        match self {
            Component::Scheme => "scheme",
            Component::Opaque => "opaque",
            Component::User => "user",
            Component::Host => "host",
            Component::Port => "port",
            Component::Path => "path",
            Component::Fragment => "fragment",
            Component::Params => "param",
        }
    }
}

/// How displayed values are derived from a parsed URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Percent-decode path, fragment and query parameters
    pub decode: bool,
    /// Show the host in Unicode instead of its punycode form
    pub puny: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            decode: true,
            puny: false,
        }
    }
}

/// Display-ready components of a parsed URL
///
/// Missing scalar components are `None` and serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Components {
    pub scheme: Option<String>,
    pub opaque: Option<String>,
    pub user: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
    pub fragment: Option<String>,
    pub params: QueryParams,
}

impl Components {
    /// `(label, value)` lines for text output, empty strings for missing
    /// components and one `param` line per query value
    pub fn labeled_lines(&self) -> Vec<(&'static str, String)> {
        let scalars = [
            (Component::Scheme, &self.scheme),
            (Component::Opaque, &self.opaque),
            (Component::User, &self.user),
            (Component::Host, &self.host),
            (Component::Port, &self.port),
            (Component::Path, &self.path),
            (Component::Fragment, &self.fragment),
        ];
        let mut lines: Vec<(&'static str, String)> = scalars
            .into_iter()
            .map(|(component, value)| (component.label(), value.clone().unwrap_or_default()))
            .collect();

        let param = Component::Params.label();
        if self.params.is_empty() {
            lines.push((param, String::new()));
        } else {
            lines.extend(self.param_lines().into_iter().map(|line| (param, line)));
        }
        lines
    }

    /// The value lines of one component; one line per value for parameters
    pub fn lines_of(&self, component: Component) -> Vec<String> {
        let value = |field: &Option<String>| vec![field.clone().unwrap_or_default()];
        match component {
            Component::Scheme => value(&self.scheme),
            Component::Opaque => value(&self.opaque),
            Component::User => value(&self.user),
            Component::Host => value(&self.host),
            Component::Port => value(&self.port),
            Component::Path => value(&self.path),
            Component::Fragment => value(&self.fragment),
            Component::Params => self.param_lines(),
        }
    }

    fn param_lines(&self) -> Vec<String> {
        self.params
            .pairs()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect()
    }
}

/// Projects a [`ParsedUrl`] into display values
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentExtractor {
    options: ExtractOptions,
}

impl ComponentExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Derives every component
    ///
    /// Fails only when punycode conversion of the host is requested and the
    /// host cannot be converted.
    pub fn extract_all(&self, parsed: &ParsedUrl) -> Result<Components> {
        let (path, fragment, params) = if self.options.decode {
            (&parsed.path, &parsed.fragment, parsed.query.clone())
        } else {
            (&parsed.escaped_path, &parsed.escaped_fragment, parsed.raw_query_pairs())
        };

        let components = Components {
            scheme: present(&parsed.scheme),
            opaque: present(&parsed.opaque),
            user: present(&parsed.userinfo),
            host: present(&self.host(parsed)?),
            port: present(&parsed.port),
            path: present(path),
            fragment: present(fragment),
            params,
        };
        debug!("Extracted components: {:?}", components);
        Ok(components)
    }

    fn host(&self, parsed: &ParsedUrl) -> Result<String> {
        let host = &parsed.host;
        if !self.options.puny || host.is_empty() || host.parse::<IpAddr>().is_ok() {
            return Ok(host.clone());
        }
        punycode_decode(host)
    }
}

fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
