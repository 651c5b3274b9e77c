//! Entry point for the Bible reader.
//!
//! - Load user configuration from `conf/config.toml`.
//! - Resolve the corpus source (first argument, else config).
//! - Open the per-source persistence store.
//! - Launch the GUI; the corpus itself loads inside the app.

mod app;
mod cache;
mod config;
mod corpus;
mod reading;
mod storage;
mod theme;

use crate::app::run_app;
use crate::cache::open_store;
use crate::config::load_config;
use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let mut config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    if let Some(source) = env::args().nth(1) {
        let source = source.trim().to_string();
        if !source.is_empty() {
            config.corpus_source = source;
        }
    }
    info!(
        source = %config.corpus_source,
        level = %config.log_level,
        "Starting Bible reader"
    );

    let store = open_store(Path::new(&config.data_dir), &config.corpus_source);
    run_app(config, store).context("Failed to start the GUI")?;
    Ok(())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
