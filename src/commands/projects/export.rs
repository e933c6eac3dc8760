use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::utils::{export_file_name, export_project, resolve_project};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Export the messages of a project to an Excel file")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: Option<String>,
    #[clap(short, long, help = "Where to write the file")]
    pub output: Option<PathBuf>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = resolve_project(&state, options.project).await?;

    let path = options
        .output
        .unwrap_or_else(|| PathBuf::from(export_file_name(&project)));

    log::info!("Exporting messages of `{}`", project.name);

    let bytes = export_project(&state.http, &project.id).await?;

    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {} to {}", file_size(bytes.len()), path.display());

    Ok(())
}

fn file_size(len: usize) -> String {
    if len < 1024 {
        format!("{len}B")
    } else {
        format!("{:.1}KB", len as f64 / 1024.0)
    }
}
