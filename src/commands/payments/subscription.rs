use anyhow::Result;
use clap::Parser;
use serde_json::Value;

use super::utils::get_subscription;
use crate::state::State;
use crate::utils::capitalize;

#[derive(Debug, Parser)]
#[clap(about = "Show your current plan")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    let subscription = get_subscription(&state.http).await?;

    match subscription.plan {
        Some(plan) => println!("Plan: {plan}"),
        None => println!("Plan: Free"),
    }

    if let Some(status) = subscription.status {
        println!("Status: {}", capitalize(&status));
    }

    for (key, value) in &subscription.extra {
        let value = match value {
            Value::String(value) => value.clone(),
            Value::Null => continue,
            value => value.to_string(),
        };

        println!("{}: {value}", capitalize(&key.replace('_', " ")));
    }

    Ok(())
}
