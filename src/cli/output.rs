use anyhow::{Context, Result};

use crate::url_parser::Components;

const BOLD_BLUE: &str = "\x1b[1;34m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Renders parse results as text lines or JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    color: bool,
}

impl Formatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// One output line; an empty label prints the bare value
    pub fn line(&self, label: &str, value: &str) -> String {
        if label.is_empty() {
            value.to_owned()
        } else if self.color {
            format!("{BOLD_BLUE}{label}{RESET}:\t{GREEN}{value}{RESET}")
        } else {
            format!("{}: {}", label, value)
        }
    }

    /// Every component on its own labeled line
    pub fn labeled(&self, components: &Components) -> Vec<String> {
        components
            .labeled_lines()
            .iter()
            .map(|(label, value)| self.line(label, value))
            .collect()
    }

    /// Components as a single-line JSON object
    pub fn json(components: &Components) -> Result<String> {
        serde_json::to_string(components).context("Cannot convert to JSON.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_plain() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.line("scheme", "https"), "scheme: https");
        assert_eq!(formatter.line("", "https"), "https");
        assert_eq!(formatter.line("param", ""), "param: ");
    }

    #[test]
    fn test_line_colored() {
        let formatter = Formatter::new(true);
        assert_eq!(
            formatter.line("host", "test.com"),
            "\x1b[1;34mhost\x1b[0m:\t\x1b[32mtest.com\x1b[0m"
        );
        assert_eq!(formatter.line("", "test.com"), "test.com");
    }

    #[test]
    fn test_json_of_empty_components() {
        let json = Formatter::json(&Components::default()).unwrap();
        assert_eq!(
            json,
            r#"{"scheme":null,"opaque":null,"user":null,"host":null,"port":null,"path":null,"fragment":null,"params":{}}"#
        );
    }
}
