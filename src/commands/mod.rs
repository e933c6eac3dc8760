pub mod auth;
pub mod completions;
pub mod config;
pub mod dashboard;
pub mod dm;
pub mod jobs;
pub mod messages;
pub mod payments;
pub mod projects;
pub mod whoami;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Auth(auth::Options),
    #[clap(name = "projects", alias = "project")]
    Projects(projects::Options),
    Dm(dm::Options),
    Jobs(jobs::Options),
    #[clap(name = "messages", alias = "msg")]
    Messages(messages::Options),
    #[clap(name = "payments", alias = "billing")]
    Payments(payments::Options),
    #[clap(name = "dashboard", alias = "home")]
    Dashboard(dashboard::Options),
    #[clap(name = "whoami", alias = "me")]
    Whoami(whoami::Options),
    Config(config::Options),
    Completions(completions::Options),
}

impl Commands {
    /// Everything but local setup and public listings talks to the API on
    /// behalf of the user.
    pub fn requires_login(&self) -> bool {
        !matches!(
            self,
            Self::Auth(_)
                | Self::Config(_)
                | Self::Completions(_)
                | Self::Payments(payments::Options {
                    commands: payments::Commands::Plans(_),
                })
        )
    }
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    if command.requires_login() {
        state.ensure_logged_in()?;
    }

    match command {
        Commands::Auth(options) => auth::handle(options, state).await,
        Commands::Config(options) => config::handle(options, state).await,
        Commands::Completions(options) => {
            completions::handle(options);
            Ok(())
        }
        Commands::Projects(options) => projects::handle(options, state).await,
        Commands::Dm(options) => dm::handle(options, state).await,
        Commands::Jobs(options) => jobs::handle(options, state).await,
        Commands::Messages(options) => messages::handle(options, state).await,
        Commands::Payments(options) => payments::handle(options, state).await,
        Commands::Dashboard(options) => dashboard::handle(options, state).await,
        Commands::Whoami(options) => whoami::handle(options, state).await,
    }
}
