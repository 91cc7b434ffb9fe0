use anyhow::Result;
use tracing::{debug, info};

use super::config::{Config, ParseView, Task};
use super::output::Formatter;
use crate::codec::{percent_decode, percent_encode, punycode_decode, punycode_encode};
use crate::uri_builder::{compose, ComponentInput};
use crate::url_parser::{ComponentExtractor, ParsedUrl};

/// Runs the configured task and returns the lines to print
pub fn execute(config: &Config) -> Result<Vec<String>> {
    match &config.task {
        Task::Build(input) => Ok(vec![build(input)]),
        Task::Parse { input, view } => parse(config, input, view),
        Task::Encode { input } => encode(input, config.puny).map(|line| vec![line]),
        Task::Decode { input } => decode(input, config.puny).map(|line| vec![line]),
    }
}

fn build(input: &ComponentInput) -> String {
    info!("Building URL");
    compose(input)
}

fn parse(config: &Config, input: &str, view: &ParseView) -> Result<Vec<String>> {
    info!("Parsing URL: {}", input);
    let parsed = ParsedUrl::parse(input)?;
    let components = ComponentExtractor::new(config.extract_options()).extract_all(&parsed)?;
    let formatter = Formatter::new(view.color);

    if let Some(component) = view.selection {
        debug!("Showing only {:?}", component);
        return Ok(components
            .lines_of(component)
            .iter()
            .map(|value| formatter.line("", value))
            .collect());
    }

    if view.json {
        return Ok(vec![Formatter::json(&components)?]);
    }

    Ok(formatter.labeled(&components))
}

fn encode(input: &str, puny: bool) -> Result<String> {
    if puny {
        punycode_encode(input)
    } else {
        Ok(percent_encode(input))
    }
}

fn decode(input: &str, puny: bool) -> Result<String> {
    if puny {
        punycode_decode(input)
    } else {
        percent_decode(input)
    }
}
