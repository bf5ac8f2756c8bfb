use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trackbridge")]
#[command(version)]
#[command(about = "An MCP server exposing a remote issue tracker as callable tools")]
#[command(long_about = "
trackbridge is an MCP (Model Context Protocol) server that forwards tool
calls to a remote issue tracker: issues, teams, projects, labels, cycles,
comments, attachments and users.

Configuration comes from the environment:
  TRACKBRIDGE_API_KEY        API key for the remote tracker (required)
  TRACKBRIDGE_API_URL        GraphQL endpoint override
  TRACKBRIDGE_TIMEOUT_SECS   Request timeout in seconds

Example usage:
  trackbridge serve     # Run as MCP server on stdio
  trackbridge doctor    # Check configuration and setup
  trackbridge tools list
  trackbridge tools call issue_list --args '{\"team_id\": \"...\"}'
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs trackbridge as an MCP server over stdio. This is the mode MCP hosts
invoke. The server will:

- Read tracker credentials from the environment
- Expose the tracker operations as MCP tools
- Log to ~/.trackbridge (override the file with TRACKBRIDGE_LOG_FILE)

Example:
  trackbridge serve
  # Or configure in your MCP host's server settings
")]
    Serve,
    /// Diagnose configuration and setup issues
    Doctor,
    /// Inspect or invoke the registered tools directly
    Tools {
        #[command(subcommand)]
        subcommand: ToolsSubcommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ToolsSubcommand {
    /// List every registered tool with its description
    List,
    /// Invoke one tool and print its response
    Call {
        /// Tool name, e.g. issue_list
        name: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,

        /// Run against the seeded in-memory tracker instead of the remote
        #[arg(long)]
        mock: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["trackbridge", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_tools_call_with_args() {
        let cli = Cli::try_parse_from([
            "trackbridge",
            "tools",
            "call",
            "issue_get",
            "--args",
            r#"{"id": "issue_1"}"#,
            "--mock",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Tools {
                subcommand: ToolsSubcommand::Call { name, args, mock },
            }) => {
                assert_eq!(name, "issue_get");
                assert!(args.contains("issue_1"));
                assert!(mock);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["trackbridge", "--quiet", "doctor"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Doctor)));
    }
}
