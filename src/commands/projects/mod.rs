mod create;
mod delete;
mod export;
mod info;
mod list;
mod switch;
pub mod types;
mod update;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "new", alias = "create")]
    Create(create::Options),
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    #[clap(name = "info", alias = "show")]
    Info(info::Options),
    #[clap(name = "update", alias = "edit")]
    Update(update::Options),
    #[clap(name = "rm", alias = "delete")]
    Delete(delete::Options),
    Switch(switch::Options),
    Export(export::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage outreach projects")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Create(options) => create::handle(options, state).await,
        Commands::List(options) => list::handle(options, state).await,
        Commands::Info(options) => info::handle(options, state).await,
        Commands::Update(options) => update::handle(options, state).await,
        Commands::Delete(options) => delete::handle(options, state).await,
        Commands::Switch(options) => switch::handle(options, state).await,
        Commands::Export(options) => export::handle(options, state).await,
    }
}
