mod cancel;
mod info;
mod list;
pub mod types;
pub mod utils;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    #[clap(name = "info", alias = "status")]
    Info(info::Options),
    #[clap(name = "cancel", alias = "rm")]
    Cancel(cancel::Options),
    Watch(watch::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Follow queued message generation jobs")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(options, state).await,
        Commands::Info(options) => info::handle(options, state).await,
        Commands::Cancel(options) => cancel::handle(options, state).await,
        Commands::Watch(options) => watch::handle(options, state).await,
    }
}
