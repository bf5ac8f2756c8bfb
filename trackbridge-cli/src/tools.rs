//! Direct tool invocation from the CLI
//!
//! Builds the same registry the MCP server uses and drives it without a
//! protocol host, for listing tools and debugging single calls.

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::*;
use rmcp::model::RawContent;

use trackbridge::client::mock::MockTracker;
use trackbridge::client::{HttpTracker, Tracker};
use trackbridge::config::TrackerConfig;
use trackbridge::mcp::McpServer;

use crate::cli::ToolsSubcommand;
use crate::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};

pub async fn run_tools(subcommand: ToolsSubcommand) -> Result<i32> {
    match subcommand {
        ToolsSubcommand::List => list_tools(),
        ToolsSubcommand::Call { name, args, mock } => call_tool(&name, &args, mock).await,
    }
}

fn list_tools() -> Result<i32> {
    // Listing needs no credentials; the mock backs the registry
    let server = McpServer::new(Arc::new(MockTracker::new()));

    let mut tools = server.tools();
    tools.sort_by(|a, b| a.name.cmp(&b.name));

    for tool in tools {
        let description = tool.description.unwrap_or_default();
        println!("{}", tool.name.as_ref().bold());
        println!("  {}", description.as_ref().dimmed());
    }
    Ok(EXIT_SUCCESS)
}

async fn call_tool(name: &str, args: &str, mock: bool) -> Result<i32> {
    let arguments: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(args).context("--args must be a JSON object")?;

    let tracker: Arc<dyn Tracker> = if mock {
        Arc::new(MockTracker::with_fixtures())
    } else {
        let config = TrackerConfig::from_env().context("tracker configuration")?;
        Arc::new(HttpTracker::new(config).context("building HTTP client")?)
    };

    let server = McpServer::new(tracker);
    let result = server.dispatch_tool(name, arguments).await;

    for content in &result.content {
        if let RawContent::Text(text) = &content.raw {
            println!("{}", text.text);
        }
    }

    if result.is_error == Some(true) {
        eprintln!("{}", "tool call returned an error".red());
        Ok(EXIT_WARNING)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_call_tool_mock_roundtrip() {
        let code = call_tool("user_me", "{}", true).await.unwrap();
        assert_eq!(code, EXIT_SUCCESS);
    }

    #[tokio::test]
    async fn test_call_tool_unknown_returns_warning() {
        let code = call_tool("no_such_tool", "{}", true).await.unwrap();
        assert_eq!(code, EXIT_WARNING);
    }

    #[tokio::test]
    async fn test_call_tool_rejects_non_object_args() {
        let result = call_tool("user_me", "[1, 2]", true).await;
        assert!(result.is_err());
    }
}
