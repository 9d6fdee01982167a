use std::fs;
use std::io::{self, Read, Write};

use crate::cli::commands::ReplayArgs;
use crate::cli::output::step_to_json;
use crate::model::config::AppConfig;
use crate::ops::task_ops::TaskListController;
use crate::parse::parse_script;

/// Replay an intent script against a fresh task list, printing JSON state.
pub fn cmd_replay(args: ReplayArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source = match &args.file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let steps = parse_script(&source)?;
    tracing::info!(steps = steps.len(), "replaying script");

    let mut list = TaskListController::new().trim_on_commit(config.tasks.trim_on_commit);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for step in steps {
        let result = list.dispatch(step.intent.clone());
        if let Err(e) = &result {
            tracing::debug!(line = step.line, "{}", e);
        }
        if !args.final_only {
            let view = list.view();
            let json = serde_json::to_string(&step_to_json(&step.intent, &view, &result))?;
            writeln!(out, "{}", json)?;
        }
    }

    if args.final_only {
        writeln!(out, "{}", serde_json::to_string(&list.view())?)?;
    }
    Ok(())
}
