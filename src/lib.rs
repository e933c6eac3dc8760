pub mod commands;
pub mod config;
pub mod state;
pub mod store;
pub mod utils;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "dmify",
    about = "✉️ Generate personalized Instagram DMs from your terminal",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'p',
        long = "project",
        help = "ID of the project to use",
        global = true
    )]
    pub project: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli() {
        use clap::CommandFactory;

        CLI::command().debug_assert();
    }

    #[test]
    fn test_global_project_flag() {
        let cli = CLI::try_parse_from(["dmify", "jobs", "watch", "-p", "65f0", "--until-idle"])
            .unwrap();

        assert_eq!(cli.project.as_deref(), Some("65f0"));
        assert!(matches!(cli.commands, Commands::Jobs(_)));
    }

    #[test]
    fn test_requires_login() {
        let parse = |args: &[&str]| {
            CLI::try_parse_from(std::iter::once("dmify").chain(args.iter().copied()))
                .unwrap()
                .commands
        };

        assert!(!parse(&["payments", "plans"]).requires_login());
        assert!(!parse(&["auth", "logout"]).requires_login());
        assert!(!parse(&["config", "show"]).requires_login());

        assert!(parse(&["payments", "credits"]).requires_login());
        assert!(parse(&["billing", "checkout", "pro"]).requires_login());
        assert!(parse(&["projects", "ls"]).requires_login());
        assert!(parse(&["dm", "generate", "jane"]).requires_login());
    }

    #[test]
    fn test_queue_requires_usernames() {
        assert!(CLI::try_parse_from(["dmify", "dm", "queue"]).is_err());
        assert!(CLI::try_parse_from(["dmify", "dm", "queue", "@jane", "coffee_lab"]).is_ok());
    }
}
