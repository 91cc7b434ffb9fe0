use anyhow::Result;
use clap::Parser;
use std::process;
use url_tool::cli::{execute, Cli, Config};
use url_tool::utils::logger::init_logger;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logger() {
        eprintln!("Failed to initialize logging: {:#}", err);
    }

    if let Err(err) = run(cli) {
        println!("{:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    for line in execute(&config)? {
        println!("{}", line);
    }
    Ok(())
}
