//! CHAT command - Ask the chatbot a question.

use anyhow::{Result, bail};
use chatbot_core::MatchResult;
use chatbot_intent::ChatService;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the chat command.
#[derive(Args)]
pub struct ChatArgs {
    /// Question to ask
    pub message: String,

    /// Answer with the built-in corpus in-process instead of calling the server
    #[arg(long)]
    pub local: bool,
}

/// Request body for the chat endpoint.
#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Response from the chat endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub data: MatchResult,
}

impl HumanReadable for ChatResponse {
    fn print_human(&self) {
        let result = &self.data;
        let header = if result.success {
            format!("Intent: {}", result.intent).green().bold()
        } else {
            "No answer available".yellow().bold()
        };

        println!("{}", header);
        println!(
            "  {} {:.3}",
            "Confidence:".cyan(),
            result.confidence
        );
        if let Some(error) = &result.error {
            println!("  {} {}", "Error:".red(), error);
        }
        println!();
        println!("{}", result.response);
    }
}

/// Execute the chat command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ChatArgs,
) -> Result<()> {
    let message = args.message.trim();
    if message.is_empty() {
        bail!("Message is required and must be a non-empty string");
    }

    let response = if args.local {
        answer_locally(message)?
    } else {
        let url = format!("{}/api/chatbot/chat", base_url);
        make_request(client.post(&url).json(&ChatRequest { message })).await?
    };

    output(&response, human)
}

/// Builds the built-in index and answers without a server.
fn answer_locally(message: &str) -> Result<ChatResponse> {
    let service = ChatService::default();
    service.initialize()?;

    Ok(ChatResponse {
        success: true,
        data: service.process_message(message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_answer_uses_builtin_corpus() {
        let response = answer_locally("How can I donate?").unwrap();
        assert!(response.data.success);
        assert_eq!(response.data.intent, "donation");
    }

    #[test]
    fn parse_server_response() {
        let json = r#"{"success":true,"data":{"intent":"events","response":"AGM","confidence":0.61,"success":true}}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.intent, "events");
        assert!(response.data.error.is_none());
    }
}
