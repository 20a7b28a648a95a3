mod bindings;
mod cli;
mod commands;
mod config;
mod controller;
mod error;
mod filter;
mod output;
mod room;
mod tui;

use clap::Parser;
use error::ErrorFormatter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;

    init_tracing(verbose);

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err.into_rich()));
        std::process::exit(1);
    }
}

/// RUST_LOG が優先。未設定なら -v で debug、それ以外は warn
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
