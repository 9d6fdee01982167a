use crate::ops::task_ops::Intent;

/// Error type for intent script parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs a task id")]
    MissingArgument { line: usize, command: String },
    #[error("line {line}: '{command}' takes no argument")]
    UnexpectedArgument { line: usize, command: String },
}

/// One intent together with its 1-indexed source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub intent: Intent,
}

/// Parse an intent script.
///
/// One intent per line: `set <text>`, `commit`, `edit <id>`, `cancel`,
/// `delete <id>`. The command ends at the first space or tab, and everything
/// after that separator is kept verbatim for `set`, including trailing
/// whitespace. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }
        let intent = parse_line(raw, line)?;
        steps.push(ScriptStep { line, intent });
    }
    Ok(steps)
}

fn parse_line(raw: &str, line: usize) -> Result<Intent, ScriptError> {
    let raw = raw.trim_start();
    let (command, rest) = match raw.split_once([' ', '\t']) {
        Some((cmd, rest)) => (cmd, Some(rest)),
        None => (raw.trim_end(), None),
    };

    match command {
        "set" => Ok(Intent::SetBuffer(rest.unwrap_or_default().to_string())),
        "commit" => no_argument(command, rest, line).map(|_| Intent::Commit),
        "cancel" => no_argument(command, rest, line).map(|_| Intent::CancelEdit),
        "edit" => task_id(command, rest, line).map(Intent::StartEdit),
        "delete" => task_id(command, rest, line).map(Intent::Delete),
        _ => Err(ScriptError::UnknownCommand {
            line,
            command: command.to_string(),
        }),
    }
}

fn no_argument(command: &str, rest: Option<&str>, line: usize) -> Result<(), ScriptError> {
    match rest.map(str::trim) {
        None | Some("") => Ok(()),
        Some(_) => Err(ScriptError::UnexpectedArgument {
            line,
            command: command.to_string(),
        }),
    }
}

fn task_id(command: &str, rest: Option<&str>, line: usize) -> Result<String, ScriptError> {
    match rest.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ScriptError::MissingArgument {
            line,
            command: command.to_string(),
        }),
    }
}
