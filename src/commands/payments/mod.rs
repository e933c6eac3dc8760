mod checkout;
mod credits;
mod history;
mod plans;
mod subscription;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Plans(plans::Options),
    Credits(credits::Options),
    #[clap(name = "history", alias = "ls")]
    History(history::Options),
    #[clap(name = "checkout", alias = "buy")]
    Checkout(checkout::Options),
    Subscription(subscription::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage credits and payments")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Plans(options) => plans::handle(&options, &state).await,
        Commands::Credits(options) => credits::handle(&options, &state).await,
        Commands::History(options) => history::handle(&options, &state).await,
        Commands::Checkout(options) => checkout::handle(&options, &state).await,
        Commands::Subscription(options) => subscription::handle(&options, &state).await,
    }
}
