use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo", about = concat!("todo v", env!("CARGO_PKG_VERSION"), " - a to-do list that lives as long as you do"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: <config dir>/todolist/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file (default: $TMPDIR/todolist.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an intent script and print the view state after each intent as JSON
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file (default: read stdin)
    pub file: Option<PathBuf>,
    /// Print only the final state
    #[arg(long = "final")]
    pub final_only: bool,
}
