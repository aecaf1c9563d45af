//! Stage hook execution.

use std::process::Command;

use strata_core::errors::GateError;

use super::stage::Stage;

/// Run a configured hook command. The command is split on whitespace; the
/// first token is the program, the rest are arguments (no shell
/// interpolation).
pub(crate) fn run_hook(stage: Stage, command: &str) -> Result<(), GateError> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(GateError::HookFailed {
            command: command.to_string(),
            message: "empty command".to_string(),
        });
    };

    tracing::info!(%stage, %command, "running stage hook");
    let status = Command::new(program)
        .args(parts)
        .status()
        .map_err(|e| GateError::HookFailed {
            command: command.to_string(),
            message: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(GateError::HookFailed {
            command: command.to_string(),
            message: match status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            },
        })
    }
}
