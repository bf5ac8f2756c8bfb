use std::process;

mod cli;
mod doctor;
mod exit_codes;
mod tools;

use cli::{Cli, Commands};
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    use is_terminal::IsTerminal;
    use tracing::Level;

    // MCP hosts run `serve` with stdin piped; log to a file there so
    // stdio stays clean for the protocol.
    let is_mcp_mode =
        matches!(cli.command, Some(Commands::Serve)) && !std::io::stdin().is_terminal();

    let log_level = if is_mcp_mode {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    if is_mcp_mode {
        let log_dir = doctor::default_log_dir();
        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create log directory: {e}");
        }

        let log_filename =
            std::env::var("TRACKBRIDGE_LOG_FILE").unwrap_or_else(|_| "mcp.log".to_string());
        let log_file = log_dir.join(log_filename);

        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
        {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_writer(file)
                    .with_max_level(log_level)
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to open log file, using stderr: {e}");
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_max_level(log_level)
                    .init();
            }
        }
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level)
            .init();
    }

    let exit_code = match cli.command {
        Some(Commands::Serve) | None => {
            tracing::info!("Starting MCP server");
            run_server().await
        }
        Some(Commands::Doctor) => {
            tracing::info!("Running diagnostics");
            run_doctor()
        }
        Some(Commands::Tools { subcommand }) => match tools::run_tools(subcommand).await {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {e:#}");
                EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}

async fn run_server() -> i32 {
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;
    use trackbridge::client::HttpTracker;
    use trackbridge::config::TrackerConfig;
    use trackbridge::mcp::McpServer;

    let config = match TrackerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Tracker configuration error: {}", e);
            return EXIT_ERROR;
        }
    };

    let tracker = match HttpTracker::new(config) {
        Ok(tracker) => tracker,
        Err(e) => {
            tracing::error!("Failed to create tracker client: {}", e);
            return EXIT_ERROR;
        }
    };

    let server = McpServer::new(Arc::new(tracker));
    tracing::info!("MCP server initialized with {} tools", server.tool_names().len());

    // Set up cancellation token and ctrl-c handling
    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl+c");

        tracing::info!("Shutdown signal received");
        ct_clone.cancel();
    });

    match serve_server(server, stdio()).await {
        Ok(running_service) => {
            tracing::info!("MCP server started successfully");

            tokio::select! {
                result = running_service.waiting() => {
                    match result {
                        Ok(reason) => tracing::info!("MCP server shut down: {:?}", reason),
                        Err(e) => {
                            tracing::error!("MCP server task error: {}", e);
                            return EXIT_WARNING;
                        }
                    }
                }
                _ = ct.cancelled() => {
                    tracing::info!("MCP server cancelled");
                }
            }

            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            EXIT_WARNING
        }
    }
}

fn run_doctor() -> i32 {
    let mut doctor = doctor::Doctor::new();
    match doctor.run_diagnostics() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!("Doctor error: {}", e);
            EXIT_ERROR
        }
    }
}
