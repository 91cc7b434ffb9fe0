use anyhow::Result;
use std::io::IsTerminal;
use tracing::debug;

use super::args::{BuildArgs, Cli, Command, ParseArgs};
use crate::codec::strip_shell_escapes;
use crate::uri_builder::ComponentInput;
use crate::url_parser::{Component, ExtractOptions};

/// How `parse` presents its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseView {
    /// Print only this component
    pub selection: Option<Component>,
    /// Print a JSON object; ignored when a component is selected
    pub json: bool,
    pub color: bool,
    pub decode: bool,
}

/// The work a single invocation performs
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Build(ComponentInput),
    Parse { input: String, view: ParseView },
    Encode { input: String },
    Decode { input: String },
}

/// Settings for one invocation, built once from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Convert hosts to or from punycode
    pub puny: bool,

    pub task: Task,
}

impl Config {
    /// Resolves parsed arguments into a configuration
    ///
    /// Shell escapes are removed from every input here and `build --json`
    /// input is read here, so a malformed JSON blob fails before anything is
    /// printed.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let shell = cli.shell;
        let unescape = |input: String| {
            if shell {
                strip_shell_escapes(&input)
            } else {
                input
            }
        };

        let task = match cli.command {
            Command::Build(args) => Task::Build(Self::component_input(args, unescape)?),
            Command::Parse(args) => Task::Parse {
                view: Self::parse_view(&args),
                input: unescape(args.input),
            },
            Command::Encode(args) => Task::Encode { input: unescape(args.input) },
            Command::Decode(args) => Task::Decode { input: unescape(args.input) },
        };

        let config = Config {
            puny: cli.puny,
            task,
        };
        debug!("Configuration: {:?}", config);
        Ok(config)
    }

    fn component_input(args: BuildArgs, unescape: impl Fn(String) -> String) -> Result<ComponentInput> {
        if let Some(json) = args.json {
            return ComponentInput::from_json(&unescape(json));
        }

        Ok(ComponentInput {
            scheme: args.scheme,
            userinfo: args.user,
            host: args.host,
            port: args.port,
            path: args.path,
            opaque_path: args.uri_path,
            fragment: args.fragment,
            raw_query: args.query,
            param_pairs: if args.params.is_empty() { None } else { Some(args.params) },
            param_map: None,
        })
    }

    // The first selected component in flag order wins
    fn parse_view(args: &ParseArgs) -> ParseView {
        let selection = [
            (args.scheme, Component::Scheme),
            (args.opaque, Component::Opaque),
            (args.user, Component::User),
            (args.host, Component::Host),
            (args.port, Component::Port),
            (args.path, Component::Path),
            (args.fragment, Component::Fragment),
            (args.params, Component::Params),
        ]
        .into_iter()
        .find_map(|(selected, component)| selected.then_some(component));

        ParseView {
            selection,
            json: args.json,
            color: use_color(args.no_color, std::io::stdout().is_terminal()),
            decode: !args.no_decode,
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        let decode = match &self.task {
            Task::Parse { view, .. } => view.decode,
            _ => true,
        };
        ExtractOptions {
            decode,
            puny: self.puny,
        }
    }
}

// Escape codes only go to a terminal; piped output stays plain
fn use_color(no_color: bool, stdout_is_terminal: bool) -> bool {
    !no_color && stdout_is_terminal
}
