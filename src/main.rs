use clap::Parser;
use tracing_subscriber::EnvFilter;

mod album;
mod apply;
mod cli;
mod config;
mod decide;
mod display;
mod error;
mod issues;
mod library;
mod naming;
mod plan;
mod runtime;
mod tags;

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "reshelve=warn",
        1 => "reshelve=info",
        _ => "reshelve=debug",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    runtime::run(cli)?;
    Ok(())
}
