/*
[INPUT]:  CLI arguments, YAML configuration file, FTX_* environment overrides
[OUTPUT]: Wallet endpoint results as pretty JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ftx_wallet::{Command, WalletConfig, commands};

#[derive(Parser, Debug)]
#[command(name = "ftx-wallet", version, about = "FTX wallet command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        dry_run = args.dry_run,
        "starting ftx-wallet"
    );

    let config = load_config(&args.config_path)?;
    let client = config.build_client()?;
    info!(base_url = client.base_url(), "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .context("a command is required unless --dry-run is given")?;
    let value = commands::run(&client, command).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<WalletConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    let mut config = WalletConfig::from_file(path_str).context("load config")?;
    config.apply_overrides(|name| std::env::var(name).ok());
    config.validate().context("validate config")?;
    Ok(config)
}
