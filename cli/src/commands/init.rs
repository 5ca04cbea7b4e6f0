//! INIT command - Rebuild the chatbot index on the server.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    // No additional arguments needed
}

/// Response from the initialize endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct InitResponse {
    pub success: bool,
    pub message: String,
}

impl HumanReadable for InitResponse {
    fn print_human(&self) {
        if self.success {
            println!("{}", self.message.green().bold());
        } else {
            println!("{}", self.message.red().bold());
        }
    }
}

/// Execute the init command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: InitArgs,
) -> Result<()> {
    let url = format!("{}/api/chatbot/initialize", base_url);

    let response: InitResponse = make_request(client.post(&url)).await?;

    output(&response, human)
}
