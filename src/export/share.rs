//! Hand-off of exported drawings to an external share command.

use super::types::ExportError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Launches the configured share command with the exported file appended
/// as its last argument.
///
/// The command runs detached with all stdio silenced; whatever it does
/// with the file (share sheet, upload, mailer) is its own business. Only
/// spawn failures are reported.
pub fn run_share_command(command: &str, path: &Path) -> Result<(), ExportError> {
    let mut parts = command.split_whitespace();
    let binary = parts
        .next()
        .ok_or_else(|| ExportError::ShareError("share command is empty".to_string()))?;

    match Command::new(binary)
        .args(parts)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => {
            log::info!(
                "Launched share command (binary: {binary}, pid: {})",
                child.id()
            );
            Ok(())
        }
        Err(err) => Err(ExportError::ShareError(format!(
            "failed to launch '{binary}': {err}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_command_is_rejected() {
        let err = run_share_command("   ", &PathBuf::from("/tmp/x.svg")).unwrap_err();
        assert!(matches!(err, ExportError::ShareError(_)));
    }

    #[test]
    fn missing_binary_is_reported() {
        let err = run_share_command(
            "definitely-not-a-real-binary-3141",
            &PathBuf::from("/tmp/x.svg"),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::ShareError(_)));
    }

    #[test]
    fn existing_binary_spawns() {
        run_share_command("true", &PathBuf::from("/tmp/x.svg")).unwrap();
    }
}
