//! slack-task - Slack notification task for pipeline hosts.
//!
//! # Environment Variables
//!
//! - `SLACK_TASK_LISTEN` - Address for `serve` (default `0.0.0.0:8080`)
//! - `SLACK_TASK_VIEWS_DIR` - Directory containing `task.template.html`
//! - `SLACK_TASK_HTTP_TIMEOUT_SECS` / `SLACK_TASK_CONNECT_TIMEOUT_SECS` - Webhook timeouts
//! - `SLACK_TASK_LOG_FORMAT` - `text` or `json`
//! - `RUST_LOG` - Log filter
//!
//! # Examples
//!
//! ```bash
//! # Serve host requests over HTTP
//! slack-task serve --listen 127.0.0.1:8080
//!
//! # Handle a single request from stdin
//! echo '{"config": {...}, "context": {...}}' | slack-task handle execute
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slack_task::{server, LogFormat, PluginSettings, SlackTaskPlugin};
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "slack_task=info,slack_notify=info";

/// Post pipeline notifications to Slack.
#[derive(Parser)]
#[command(name = "slack-task")]
#[command(about = "Slack notification task for pipeline hosts")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    settings: PluginSettings,

    /// Log output format
    #[arg(long, env = "SLACK_TASK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve host requests over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "SLACK_TASK_LISTEN", default_value = "0.0.0.0:8080")]
        listen: SocketAddr,
    },

    /// Handle one request read from stdin and print the response
    Handle {
        /// Request name (configuration, validate, execute, view)
        request: String,
    },
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stderr keeps stdout free for `handle` responses
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let plugin =
        SlackTaskPlugin::from_settings(&cli.settings).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Serve { listen } => {
            let app = server::router(Arc::new(plugin));
            let listener = TcpListener::bind(listen)
                .await
                .with_context(|| format!("Failed to bind {listen}"))?;
            info!(
                addr = %listen,
                views_dir = ?cli.settings.views_dir,
                "Slack task plugin listening"
            );
            axum::serve(listener, app).await.context("Server error")?;
        }
        Commands::Handle { request } => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request body from stdin")?;

            let response = plugin.handle(&request, &body).await;
            println!("{}", serde_json::to_string(&response.body)?);

            if !response.is_success() {
                anyhow::bail!("Request '{request}' failed with status {}", response.code);
            }
        }
    }

    Ok(())
}
