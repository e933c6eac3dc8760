mod generate;
mod queue;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "generate", alias = "gen")]
    Generate(generate::Options),
    Queue(queue::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Generate personalized DMs for Instagram users")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Generate(options) => generate::handle(options, state).await,
        Commands::Queue(options) => queue::handle(options, state).await,
    }
}
