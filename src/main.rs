use std::process;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use qrterm::cli::{self, Config};
use qrterm::encode::QrModuleSource;
use qrterm::error::Error;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = Config::parse();
    config
        .resolve_text()
        .context("failed to read text from stdin")?;

    if let Err(err) = cli::run(&config, &QrModuleSource) {
        eprintln!("Error: {}", err);
        if matches!(err, Error::MissingInput) {
            eprintln!();
            eprintln!("{}", Config::command().render_help());
        }
        process::exit(1);
    }

    Ok(())
}
