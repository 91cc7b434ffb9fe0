use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use tracing::debug;

/// Value of a single entry in a parameter mapping
///
/// A key maps either to one value or to an ordered list of values, mirroring
/// the two shapes accepted in JSON input (`"k": "v"` and `"k": ["v1", "v2"]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    Multi(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_owned())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multi(values.into_iter().map(str::to_owned).collect())
    }
}

pub type ParamMap = HashMap<String, ParamValue>;

/// The components of a URL that is about to be built
///
/// Empty strings mean "not supplied". Of the three query sources only one is
/// used: a non-empty `raw_query` wins, then `param_map`, then `param_pairs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComponentInput {
    pub scheme: String,
    #[serde(rename = "user", alias = "userinfo")]
    pub userinfo: String,       // user[:password]
    #[serde(alias = "domain")]
    pub host: String,           // may embed its own :port
    #[serde(deserialize_with = "port_from_json")]
    pub port: String,
    pub path: String,
    #[serde(rename = "uri-path", alias = "opaque")]
    pub opaque_path: String,    // path of a non-hierarchical URI such as mailto:
    pub fragment: String,
    #[serde(rename = "query")]
    pub raw_query: String,      // already encoded, written as is
    #[serde(rename = "param")]
    pub param_pairs: Option<Vec<String>>,
    #[serde(rename = "params")]
    pub param_map: Option<ParamMap>,
}

impl ComponentInput {
    /// Reads the whole input from a single JSON object
    ///
    /// There is no partial result: either every field deserializes or the
    /// call fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let input: ComponentInput = serde_json::from_str(json)
            .context("Error reading JSON.")?;
        debug!("Component input read from JSON: {:?}", input);
        Ok(input)
    }
}

fn port_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u16),
    }

    Ok(match Port::deserialize(deserializer)? {
        Port::Text(port) => port,
        Port::Number(port) => port.to_string(),
    })
}
