use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, EnvFilter};

use purrfect::app::AppContext;
use purrfect::cli::{commands, Cli, Commands, LogTarget};
use purrfect::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_target())?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Tui { variant } => {
            let ctx = AppContext::new(&config.page)?;
            let variant = variant.unwrap_or(config.page.variant);
            purrfect::tui::run(&ctx, &config, variant).await?;
        }
        Commands::Fact => {
            let ctx = AppContext::new(&config.page)?;
            commands::print_fact(&ctx).await?;
        }
        Commands::Image => {
            let ctx = AppContext::new(&config.page)?;
            commands::print_image(&ctx).await?;
        }
        Commands::List { breeds } => {
            commands::list(breeds)?;
        }
    }

    Ok(())
}

fn init_tracing(target: &LogTarget) -> anyhow::Result<()> {
    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), false),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(ansi))
        .with(EnvFilter::from_default_env())
        .init();
    Ok(())
}
