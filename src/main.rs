use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing::info;

use alert_mailer::cli::Cli;
use alert_mailer::config::load_config;
use alert_mailer::handler::handle_event;
use alert_mailer::mailer::SmtpMailer;
use alert_mailer::types::Event;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;
    info!("smtp server = {}:{}", cfg.smtp_host, cfg.smtp_port);

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read event from stdin")?;
    let event: Event = serde_json::from_str(&raw).context("Failed to parse event JSON")?;

    let mailer = SmtpMailer::from_config(&cfg)?;
    handle_event(&cfg, &event, &mailer).await?;

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
