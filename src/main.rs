use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pdfcombine::cli::Cli;
use pdfcombine::{Config, Session, WorkingDirectory, tui};

/// Send tracing output to `path`; the terminal belongs to the interface.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdfcombine=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::try_from(&cli)?;

    if let Some(path) = &config.log_file {
        init_tracing(path)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("cannot start the async runtime")?;

    let workdir = WorkingDirectory::from_current_dir()?;
    tracing::info!(version = pdfcombine::VERSION, dir = %workdir.path().display(), "starting");

    let mut session = Session::new(config, workdir, runtime.handle().clone());
    tui::run(&mut session)?;

    tracing::info!("exiting");
    Ok(())
}
