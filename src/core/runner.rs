use std::path::Path;
use std::process::Command;

use crate::core::error::GplotError;

/// Runs the plotting engine against a script file, blocking until it
/// exits. `raise` forwards the window-raise flag; everything else about
/// the plot is already inside the script.
pub fn run_script(engine: &str, script: &Path, raise: bool) -> Result<(), GplotError> {
    let mut cmd = Command::new(engine);
    if raise {
        cmd.arg("-raise");
    }
    cmd.arg(script);

    let status = cmd.status().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            GplotError::EngineNotFound
        } else {
            GplotError::Io(err)
        }
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(GplotError::EngineFailed {
            exit_code: status.code(),
        })
    }
}
