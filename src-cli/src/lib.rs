//! Shoplist Application Shell
//!
//! Thin command-line shell: parses arguments, loads configuration, wires the
//! storage backend into the list, filter and theme stores, and dispatches
//! commands. List semantics live in the `crates/` directory.

pub mod cli;
pub mod commands;
pub mod console;
pub mod render;
pub mod state;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use console::Console;
use shoplist_core::AppConfig;
use shoplist_storage::FileStore;
use state::AppState;
use std::io::{self, IsTerminal};
use std::rc::Rc;
use tracing::{debug, info};

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` wins; otherwise `-v` selects debug output and the configured
/// level applies. Logs go to stderr so command output stays pipeable.
fn init_tracing(default_level: &str, verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fallback = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Parse the command line and run one command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_with_env(cli.config.as_deref())
        .context("failed to load configuration")?;
    init_tracing(&config.logging.level, cli.verbose);

    debug!("Starting shoplist v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.data_dir()?,
    };
    let storage = FileStore::open(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    info!(dir = %data_dir.display(), "using data directory");

    let mut state = AppState::load(Rc::new(storage), config);

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut console = Console::new(io::stdin().lock(), stdout.lock(), color);

    commands::execute(&mut state, cli.command, &mut console)
}
