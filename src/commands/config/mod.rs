use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::config::{API_URL_ENV, TOKEN_ENV};
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "show", about = "Print the effective configuration")]
    Show,
    #[clap(name = "api-url", about = "Point the CLI at another API server")]
    ApiUrl {
        #[clap(help = "Base URL of the API, the default is used when omitted")]
        url: Option<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(about = "Inspect and change the CLI configuration")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub fn parse_api_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url.trim()).with_context(|| format!("Invalid URL `{url}`"))?;

    anyhow::ensure!(
        matches!(parsed.scheme(), "http" | "https"),
        "The API URL must use http or https"
    );

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    match options.commands {
        Commands::Show => {
            println!("API URL\t\t{}", state.api_url());
            println!(
                "Logged in as\t{}",
                state
                    .auth
                    .user
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |user| user.email.clone())
            );
            println!(
                "Project\t\t{}",
                state.ctx.current_project_id().unwrap_or_else(|| "-".to_string())
            );

            for env in [TOKEN_ENV, API_URL_ENV] {
                if std::env::var(env).is_ok() {
                    log::info!("`{env}` is set and overrides the stored value");
                }
            }
        }

        Commands::ApiUrl { url } => {
            state.ctx.override_api_url = url.as_deref().map(parse_api_url).transpose()?;
            state.ctx.save().await?;

            match &state.ctx.override_api_url {
                Some(url) => log::info!("Using the API at {url}"),
                None => log::info!("Using the default API"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_api_url() {
        assert_eq!(
            parse_api_url("http://localhost:8000/").unwrap(),
            "http://localhost:8000"
        );
        assert_eq!(
            parse_api_url(" https://api.example.com/v1 ").unwrap(),
            "https://api.example.com/v1"
        );
        assert!(parse_api_url("ftp://example.com").is_err());
        assert!(parse_api_url("not a url").is_err());
    }
}
