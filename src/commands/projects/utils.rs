use std::io::Write;

use anyhow::{anyhow, ensure, Result};
use console::style;
use tabwriter::TabWriter;

use super::types::{CreateProject, Project, UpdateProject};
use crate::config::EXEC_NAME;
use crate::state::http::HttpClient;
use crate::state::State;
use crate::utils::{format_timestamp, truncate};

pub async fn get_all_projects(http: &HttpClient) -> Result<Vec<Project>> {
    let data = http
        .request::<Vec<Project>>("GET", "/projects/", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn get_project(http: &HttpClient, project_id: &str) -> Result<Project> {
    let data = http
        .request::<Project>("GET", &format!("/projects/{project_id}"), None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub fn validate_project(project: &CreateProject) -> Result<()> {
    ensure!(!project.name.trim().is_empty(), "Project name cannot be empty");
    ensure!(
        !project.product_info.trim().is_empty(),
        "Product info cannot be empty"
    );
    ensure!(
        !project.offer_info.trim().is_empty(),
        "Offer info cannot be empty"
    );

    Ok(())
}

pub async fn create_project(http: &HttpClient, project: &CreateProject) -> Result<Project> {
    validate_project(project)?;

    let data = http
        .request::<Project>(
            "POST",
            "/projects/",
            Some((serde_json::to_vec(project)?.into(), "application/json")),
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn update_project(
    http: &HttpClient,
    project_id: &str,
    update: &UpdateProject,
) -> Result<Project> {
    ensure!(!update.is_empty(), "No valid updates provided");

    let data = http
        .request::<Project>(
            "PUT",
            &format!("/projects/{project_id}"),
            Some((serde_json::to_vec(update)?.into(), "application/json")),
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn delete_project(http: &HttpClient, project_id: &str) -> Result<()> {
    http.request::<serde_json::Value>("DELETE", &format!("/projects/{project_id}"), None)
        .await?;

    Ok(())
}

pub async fn export_project(http: &HttpClient, project_id: &str) -> Result<Vec<u8>> {
    http.request_bytes("GET", &format!("/projects/{project_id}/export"))
        .await
}

/// `My Project.xlsx` -> `my_project_messages.xlsx`
pub fn export_file_name(project: &Project) -> String {
    let slug = project
        .name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect::<String>()
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if slug.is_empty() {
        format!("{}_messages.xlsx", project.id)
    } else {
        format!("{slug}_messages.xlsx")
    }
}

pub fn format_projects(projects: &[Project], default: &Option<String>, title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, " NAME\tID\tPRODUCT\tCREATED").unwrap();
    }

    for project in projects {
        let marker = if default.as_deref() == Some(project.id.as_str()) {
            "*"
        } else {
            " "
        };

        writeln!(
            &mut tw,
            "{marker}{}\t{}\t{}\t{}",
            project.name,
            project.id,
            truncate(&project.product_info, 40),
            format_timestamp(&project.created_at),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

pub fn format_project(project: &Project) -> String {
    format!(
        "{} ({})\n  {}: {}\n  {}: {}\n  {}: {}",
        style(&project.name).bold(),
        project.id,
        style("Product/Service").dim(),
        project.product_info,
        style("Offer").dim(),
        project.offer_info,
        style("Created").dim(),
        format_timestamp(&project.created_at),
    )
}

/// Finds the project to work on, from the argument, `--project`, the saved
/// default or as last resort by asking.
pub async fn resolve_project(state: &State, project: Option<String>) -> Result<Project> {
    if let Some(id) = project.or_else(|| state.ctx.current_project_id()) {
        return get_project(&state.http, &id).await;
    }

    let projects = get_all_projects(&state.http).await?;

    ensure!(
        !projects.is_empty(),
        "No projects found, create one with `{EXEC_NAME} projects new`"
    );

    let projects_fmt = format_projects(&projects, &None, false);

    let idx = dialoguer::Select::new()
        .with_prompt("Select a project")
        .items(&projects_fmt)
        .default(0)
        .interact_opt()?
        .ok_or_else(|| anyhow!("No project selected"))?;

    Ok(projects[idx].clone())
}

#[cfg(test)]
mod test {
    use super::*;

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            product_info: "Handmade leather wallets".to_string(),
            offer_info: "20% off the first order".to_string(),
            created_at: "2024-03-01T12:30:15.123456".to_string(),
        }
    }

    #[test]
    fn test_validate_project() {
        let mut create = CreateProject {
            name: "Spring launch".to_string(),
            product_info: "Wallets".to_string(),
            offer_info: "20% off".to_string(),
        };
        assert!(validate_project(&create).is_ok());

        create.offer_info = "  ".to_string();
        assert_eq!(
            validate_project(&create).unwrap_err().to_string(),
            "Offer info cannot be empty"
        );
    }

    #[test]
    fn test_update_payload() {
        let update = UpdateProject::new(Some(" New name ".to_string()), Some(String::new()), None);

        assert_eq!(update.name.as_deref(), Some("New name"));
        assert!(update.product_info.is_none());
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"name":"New name"}"#
        );

        assert!(UpdateProject::new(None, Some(" ".to_string()), None).is_empty());
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(&project("p1", "Spring Launch 2024!")),
            "spring_launch_2024_messages.xlsx"
        );
        assert_eq!(export_file_name(&project("p1", "!!!")), "p1_messages.xlsx");
    }

    #[test]
    fn test_format_projects() {
        let projects = vec![project("p1", "First"), project("p2", "Second")];

        let lines = format_projects(&projects, &Some("p2".to_string()), true);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" NAME"));
        assert!(lines[1].starts_with(" First"));
        assert!(lines[2].starts_with("*Second"));
    }
}
