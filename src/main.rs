mod application;
mod cli;
mod content;
mod domain;
mod error;
mod infra;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cine_aurora_docs=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
