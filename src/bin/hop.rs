// src/bin/hop.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hop::cli::{Cli, dispatcher, handlers::App};
use hop::core::config_loader;
use log::LevelFilter;

/// Entry point. Sets up logging from the `-v` count, loads and validates the
/// configuration, dispatches, and performs centralized error handling.
///
/// Nothing here writes to stdout: that channel belongs to the emitter, and
/// the wrapper shell function only `eval`s it when we exit zero.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_cli(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let (config, config_path) = config_loader::load_and_validate(cli.config.as_deref())?;
    let app = App {
        config,
        config_path,
        // A single -v already switches the emitted stream to verbose
        // (command previews); more only raises the log level.
        verbose: cli.verbose > 0,
    };

    dispatcher::dispatch(cli.args, &app)
}

/// Maps `-v` occurrences to a log filter (warn/info/debug); `RUST_LOG`
/// still takes precedence when set. Logs go to stderr, away from the
/// eval stream.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
