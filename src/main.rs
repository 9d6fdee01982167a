use clap::Parser;
use todolist::cli::commands::Cli;
use todolist::cli::handlers;
use todolist::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags win over the config file
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log.level.clone());
    let log_file = cli.log_file.clone().or_else(|| config.log.file.clone());
    let log_guard = match logging::init_logging(&level, log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "todolist starting");

    if let Err(e) = handlers::dispatch(cli, &config) {
        tracing::error!("{}", e);
        // Flush buffered log lines before exiting
        drop(log_guard);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
