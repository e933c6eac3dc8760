mod edit;
mod list;
mod show;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    #[clap(name = "show", alias = "info")]
    Show(show::Options),
    Edit(edit::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Browse and edit generated messages")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(options, state).await,
        Commands::Show(options) => show::handle(options, state).await,
        Commands::Edit(options) => edit::handle(options, state).await,
    }
}
