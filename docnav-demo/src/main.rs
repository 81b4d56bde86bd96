//! Terminal document viewer built on the docnav navigation library.
//!
//! The demo plays both external roles the library expects: it is the
//! collaborator supplying the route table (see `pages`) and the hosting
//! environment delivering load and fragment-change events (see
//! `adapters`).

mod adapters;
mod app;
mod pages;
mod screen;

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    app::run()
}

/// Diagnostics go to a file; stdout belongs to the TUI.
fn init_tracing() -> anyhow::Result<()> {
    let path =
        std::env::var("DOCNAV_DEMO_LOG").unwrap_or_else(|_| "docnav-demo.log".to_string());
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("docnav=trace,docnav_demo=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
