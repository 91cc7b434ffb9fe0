use clap::{Args, Parser, Subcommand};

/// A command-line tool for working with URLs.
#[derive(Debug, Parser)]
#[command(name = "url", version, about)]
pub struct Cli {
    /// Convert the domain/host to or from punycode (IDNA).
    #[arg(long, global = true)]
    pub puny: bool,

    /// Remove shell escape characters before processing.
    #[arg(long, global = true)]
    pub shell: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a new URI.
    #[command(after_help = BUILD_EXAMPLES)]
    Build(BuildArgs),
    /// Parse a URL into its components.
    Parse(ParseArgs),
    /// Percent encode a string into a valid URL.
    Encode(CodecArgs),
    /// Decode a URL encoded string.
    Decode(CodecArgs),
}

const BUILD_EXAMPLES: &str = "\
Examples:
  url build --scheme http --host myhost.com
      http://myhost.com
  url build --scheme mailto --uri-path myemail@myhost.com
      mailto:myemail@myhost.com
  url build --scheme http --host myhost.com --port 8888 --path /colorado/denver
      http://myhost.com:8888/colorado/denver
  url build --scheme http --host myhost.com --param foo=bar --param bar=baz
      http://myhost.com?bar=baz&foo=bar
  url build --json '{\"scheme\":\"http\",\"host\":\"myhost.com\",\"params\":{\"foo\":\"bar\"}}'
      http://myhost.com?foo=bar";

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Provide the whole input as JSON; other flags are ignored.
    #[arg(long)]
    pub json: Option<String>,

    /// Provide a URI scheme (or protocol).
    #[arg(long, default_value = "")]
    pub scheme: String,

    /// Provide a user[:password].
    #[arg(long, default_value = "")]
    pub user: String,

    /// Provide a URI authority/domain/host or host:port.
    #[arg(long, visible_alias = "domain", default_value = "")]
    pub host: String,

    /// Provide a port number.
    #[arg(long, default_value = "")]
    pub port: String,

    /// Provide a URL path.
    #[arg(long, default_value = "")]
    pub path: String,

    /// Provide a URI (not URL) path, e.g. for mailto.
    #[arg(long = "uri-path", default_value = "")]
    pub uri_path: String,

    /// Provide a URI fragment.
    #[arg(long, default_value = "")]
    pub fragment: String,

    /// Provide a URL query string (without ?).
    #[arg(long, default_value = "")]
    pub query: String,

    /// Provide a key=value pair of query parameters. May be repeated.
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// The URL to parse.
    pub input: String,

    /// Only display the scheme.
    #[arg(long)]
    pub scheme: bool,

    /// Only display the opaque path.
    #[arg(long, visible_alias = "uri-path")]
    pub opaque: bool,

    /// Only display the user[:password].
    #[arg(long)]
    pub user: bool,

    /// Only display the domain/host.
    #[arg(long, visible_alias = "domain")]
    pub host: bool,

    /// Only display the port number.
    #[arg(long)]
    pub port: bool,

    /// Only display the path.
    #[arg(long)]
    pub path: bool,

    /// Only display the URL fragment.
    #[arg(long)]
    pub fragment: bool,

    /// Only display the query parameters.
    #[arg(long)]
    pub params: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Suppress color text output.
    #[arg(long)]
    pub no_color: bool,

    /// Do not URL decode paths, fragments and query parameters.
    #[arg(long)]
    pub no_decode: bool,
}

#[derive(Debug, Args)]
pub struct CodecArgs {
    /// The string to convert.
    pub input: String,
}
