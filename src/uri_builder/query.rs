use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, trace};

use super::input::{ParamMap, ParamValue};

/// Ordered multimap of query parameters
///
/// Keys keep the order of their first occurrence and each key keeps its
/// values in the order they were appended. This is the order used for
/// display. [`QueryParams::encode`] ignores it and sorts by key instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value under `key`, after any values it already has
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterates over keys and their values in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Iterates over every `(key, value)` pair, one per value
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value.as_str())))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes into a query string
    ///
    /// Entries are sorted by key so the result does not depend on how the
    /// parameters were collected. Values of one key stay in insertion order.
    /// Every value is written as `key=value`, even when empty.
    pub fn encode(&self) -> String {
        let mut sorted: Vec<&(String, Vec<String>)> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut encoded = String::new();
        for (key, values) in sorted {
            let key = encode_query_component(key);
            for value in values {
                if !encoded.is_empty() {
                    encoded.push('&');
                }
                encoded.push_str(&key);
                encoded.push('=');
                encoded.push_str(&encode_query_component(value));
            }
        }
        encoded
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

// Single-valued keys serialize as a string, multi-valued keys as a list.
impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            match values.as_slice() {
                [single] => map.serialize_entry(key, single)?,
                many => map.serialize_entry(key, many)?,
            }
        }
        map.end()
    }
}

/// Escapes a query key or value
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ~`) are kept, space becomes `+`
/// and every other byte becomes upper-case `%XX`.
pub fn encode_query_component(component: &str) -> String {
    urlencoding::encode(component).replace("%20", "+")
}

/// Collects the parameters of a URL being built
///
/// A parameter mapping takes precedence over the `key=value` list. A list
/// entry without `=` is a key with an empty value; an empty entry adds
/// nothing.
pub fn query_values(param_map: Option<&ParamMap>, param_pairs: Option<&[String]>) -> QueryParams {
    let mut values = QueryParams::new();

    if let Some(map) = param_map {
        for (key, value) in map {
            match value {
                ParamValue::Scalar(single) => values.append(key.as_str(), single.as_str()),
                ParamValue::Multi(many) => {
                    for single in many {
                        values.append(key.as_str(), single.as_str());
                    }
                }
            }
        }
        return values;
    }

    if let Some(pairs) = param_pairs {
        for pair in pairs {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair.as_str(), ""));
            trace!("Query pair {:?} split into {:?}={:?}", pair, key, value);
            values.append(key, value);
        }
    }

    values
}

/// Produces the encoded query string of a URL being built
///
/// A non-empty `raw_query` is returned verbatim without re-escaping.
/// Otherwise the parameters from [`query_values`] are encoded with keys in
/// lexicographic order. No parameters give an empty string.
pub fn materialize_query(
    raw_query: &str,
    param_map: Option<&ParamMap>,
    param_pairs: Option<&[String]>,
) -> String {
    if !raw_query.is_empty() {
        debug!("Using raw query as given: {}", raw_query);
        return raw_query.to_owned();
    }

    let encoded = query_values(param_map, param_pairs).encode();
    debug!("Materialized query: {}", encoded);
    encoded
}
