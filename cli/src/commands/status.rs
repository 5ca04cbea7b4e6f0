//! STATUS command - Show chatbot index status.

use anyhow::Result;
use chatbot_core::ChatStatus;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the status command.
#[derive(Args)]
pub struct StatusArgs {
    // No additional arguments needed
}

/// Response from the status endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub data: StatusData,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatusData {
    #[serde(flatten)]
    pub status: ChatStatus,
    pub timestamp: DateTime<Utc>,
}

impl HumanReadable for StatusResponse {
    fn print_human(&self) {
        let status = &self.data.status;

        println!("{}", "Chatbot Status".green().bold());
        println!("{}", "=".repeat(40));
        println!();

        let state = if status.initialized {
            "initialized".green()
        } else {
            "not initialized".red()
        };
        println!("  {} {}", "State:".cyan(), state);
        println!("  {} {}", "Vocabulary:".cyan(), status.vocabulary_size);
        println!("  {} {}", "Documents:".cyan(), status.training_documents);
        println!(
            "  {} {}",
            "Checked:".cyan(),
            format_timestamp(&self.data.timestamp)
        );

        if !status.available_intents.is_empty() {
            println!();
            println!("  {}", "Intents:".cyan());
            for intent in &status.available_intents {
                println!("    - {}", intent);
            }
        }
    }
}

/// Execute the status command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: StatusArgs,
) -> Result<()> {
    let url = format!("{}/api/chatbot/status", base_url);

    let response: StatusResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_response() {
        let json = r#"{"success":true,"data":{"initialized":true,"vocabularySize":180,
            "trainingDocuments":156,"availableIntents":["donation","general"],
            "timestamp":"2025-08-25T09:30:00Z"}}"#;
        let response: StatusResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.status.initialized);
        assert_eq!(response.data.status.training_documents, 156);
        assert_eq!(response.data.status.available_intents.len(), 2);
    }
}
