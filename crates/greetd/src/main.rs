//! Greeter Daemon - serves greetings over HTTP

use anyhow::Result;
use clap::Parser;
use greetd::config::GreetdConfig;
use greetd::server;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "greetd")]
#[command(about = "Greeter daemon - answers GET /?name= with a greeting", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config.toml (default: $GREETD_CONFIG or /etc/greeter/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override server.bind from the config file
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    info!(target: "greetd", "Greeter Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = GreetdConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
        config.validate()?;
    }

    server::run(config).await
}
