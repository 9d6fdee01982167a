mod replay;
pub use replay::cmd_replay;

use crate::cli::commands::{Cli, Commands};
use crate::model::config::AppConfig;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => crate::tui::run(config),
        Some(Commands::Replay(args)) => cmd_replay(args, config),
    }
}
