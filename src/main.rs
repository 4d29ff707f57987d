//! cua-tools - stdio bridge entry point
//!
//! Reads tool requests as JSON lines on stdin and answers on stdout.

use std::sync::Arc;

use cua_tools::{bridge, config::Config, desktop::EnigoDesktop, tools::ToolRegistry};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries responses
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cua_tools=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    info!(
        "Loaded configuration: failsafe={}, action_pause={:?}",
        config.failsafe, config.action_pause
    );

    let registry = ToolRegistry::new(Arc::new(EnigoDesktop::new(config)));
    info!(
        "Serving {} tools on stdio",
        registry.list_tools().len()
    );

    bridge::serve(&registry, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    Ok(())
}
