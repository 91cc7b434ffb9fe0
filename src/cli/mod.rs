//! Command-line surface: arguments, configuration, output and dispatch.

mod args;
mod commands;
mod config;
mod output;

pub use args::{BuildArgs, Cli, CodecArgs, Command, ParseArgs};
pub use commands::execute;
pub use config::{Config, ParseView, Task};
pub use output::Formatter;
