use std::io::Write;

use anyhow::{anyhow, ensure, Result};
use console::style;
use tabwriter::TabWriter;

use super::types::{Message, UpdateMessage};
use crate::state::http::HttpClient;
use crate::utils::{format_timestamp, truncate};

pub async fn get_all_messages(http: &HttpClient) -> Result<Vec<Message>> {
    let data = http
        .request::<Vec<Message>>("GET", "/scrape/messages", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn get_project_messages(http: &HttpClient, project_id: &str) -> Result<Vec<Message>> {
    let data = http
        .request::<Vec<Message>>(
            "GET",
            &format!("/scrape/projects/{project_id}/messages"),
            None,
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn get_message(http: &HttpClient, project_id: &str, message_id: &str) -> Result<Message> {
    let data = http
        .request::<Message>(
            "GET",
            &format!("/scrape/projects/{project_id}/messages/{message_id}"),
            None,
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn update_message(
    http: &HttpClient,
    project_id: &str,
    message_id: &str,
    generated_message: &str,
) -> Result<()> {
    ensure!(
        !generated_message.trim().is_empty(),
        "Message cannot be empty"
    );

    http.request::<serde_json::Value>(
        "PUT",
        &format!("/scrape/projects/{project_id}/messages/{message_id}"),
        Some((
            serde_json::to_vec(&UpdateMessage { generated_message })?.into(),
            "application/json",
        )),
    )
    .await?;

    Ok(())
}

/// Case insensitive substring match on the username and the message text.
pub fn filter_messages<'a>(messages: &'a [Message], query: &str) -> Vec<&'a Message> {
    let query = query.trim().to_lowercase();

    messages
        .iter()
        .filter(|message| {
            query.is_empty()
                || message.username.to_lowercase().contains(&query)
                || message.generated_message.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn format_messages(messages: &[&Message], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "ID\tUSERNAME\tMESSAGE\tCREATED").unwrap();
    }

    for message in messages {
        writeln!(
            &mut tw,
            "{}\t@{}\t{}\t{}",
            message.id,
            message.username,
            truncate(&message.generated_message, 60),
            format_timestamp(&message.created_at),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

pub fn format_message(message: &Message) -> String {
    let mut out = format!(
        "{} {}\n\n{}\n",
        style(format!("@{}", message.username)).bold(),
        style(format_timestamp(&message.created_at)).dim(),
        message.generated_message.trim_end(),
    );

    if !message.user_info.is_null() {
        out.push_str(&format!(
            "\n{} {}\t{} {}",
            style("Name:").dim(),
            message.full_name().unwrap_or("N/A"),
            style("Followers:").dim(),
            message
                .followers()
                .map_or_else(|| "N/A".to_string(), |f| f.to_string()),
        ));
    }

    out
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn message(id: &str, username: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            username: username.to_string(),
            generated_message: text.to_string(),
            user_info: json!({ "fullName": "Jane Doe", "followersCount": 1200 }),
            created_at: "2024-03-01T12:30:15".to_string(),
        }
    }

    #[test]
    fn test_filter_messages() {
        let messages = vec![
            message("1", "jane.doe", "Hey Jane, loved your latest reel"),
            message("2", "coffee_lab", "Hi! Your latte art is amazing"),
            message("3", "Runner42", "Saw your marathon post"),
        ];

        let ids = |query| {
            filter_messages(&messages, query)
                .iter()
                .map(|m| m.id.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(""), vec!["1", "2", "3"]);
        assert_eq!(ids("JANE"), vec!["1"]);
        assert_eq!(ids("runner"), vec!["3"]);
        assert_eq!(ids("your"), vec!["1", "2", "3"]);
        assert_eq!(ids("latte"), vec!["2"]);
        assert!(ids("nothing matches").is_empty());
    }

    #[test]
    fn test_user_info() {
        let mut message = message("1", "jane", "hi");
        assert_eq!(message.full_name(), Some("Jane Doe"));
        assert_eq!(message.followers(), Some(1200));

        message.user_info = serde_json::Value::Null;
        assert_eq!(message.full_name(), None);
        assert_eq!(message.followers(), None);
    }

    #[test]
    fn test_deserialize_without_user_info() {
        let message: Message = serde_json::from_str(
            r#"{"id": "1", "username": "jane", "generated_message": "hi", "created_at": "2024-03-01T12:30:15"}"#,
        )
        .unwrap();

        assert!(message.user_info.is_null());
    }
}
