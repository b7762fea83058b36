//! gendercite CLI — citation-gender dataset collection tool.
//!
//! Fetches the works citing a set of seed DOIs, enriches each with guessed
//! first/last author genders, and writes a flat results table plus a
//! name→gender cache.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
