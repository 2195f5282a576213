/*
[INPUT]:  CLI arguments, YAML configuration file, WEBEX_* environment
[OUTPUT]: API results on stdout, diagnostics on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use webex_cli::{Cli, CliConfig, ListOptions, Session, execute, render};

const DEFAULT_LOG_LEVEL: &str = "warn";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_level.as_deref())?;

    let mut config = CliConfig::load(args.config_path.as_deref())?;
    config.apply_cli(&args);
    debug!(command = ?args.command, "configuration loaded");

    let session = Session::connect(&config)?;
    let options = ListOptions {
        max: config.max,
        org_id: config.org_id.clone(),
    };
    let result = execute(&session.client, &args.command, &options).await;
    let value = session.finish(result)?;
    println!("{}", render(&value, config.output.unwrap_or_default())?);
    Ok(())
}

/// `--log-level` wins; otherwise `RUST_LOG`, then warn.
fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid log level")?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))
            .context("invalid log level")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
