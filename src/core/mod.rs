use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

pub mod config;
pub mod error;
pub mod files;
pub mod runner;
pub mod script;

use config::Config;
use error::GplotError;
use script::Script;

const ENGINE: &str = "gnuplot";

/// Expands the file pattern, renders the script, optionally saves a
/// standalone copy, then hands the script to gnuplot via a temp file
/// that is removed when this function returns, on any path.
pub fn run(config: Config) -> Result<(), GplotError> {
    run_with_engine(config, ENGINE, &mut io::stderr())
}

fn run_with_engine(
    config: Config,
    engine: &str,
    diag: &mut dyn Write,
) -> Result<(), GplotError> {
    let pattern = config.pattern.as_deref().ok_or(GplotError::NoInputPattern)?;

    let stdin_text = if config.read_stdin {
        Some(io::read_to_string(io::stdin())?)
    } else {
        None
    };

    let file_set = files::expand(pattern);
    let invocation = shell_words::join(std::env::args());
    let script = script::render(&config, &file_set, stdin_text.as_deref(), &invocation);

    if let Some(path) = &config.save_script {
        save_executable(&script, path)?;
    }

    let mut tmp = tempfile::Builder::new()
        .prefix("gplot-")
        .suffix(".gp")
        .tempfile()?;
    tmp.write_all(script.text().as_bytes())?;
    tmp.flush()?;
    arm_signal_cleanup(tmp.path());

    let result = runner::run_script(engine, tmp.path(), config.raise);
    disarm_signal_cleanup();
    if matches!(result, Err(GplotError::EngineFailed { .. })) {
        // Re-show the script so the user can see what gnuplot choked on.
        let _ = writeln!(diag, "gplot: generated script was:");
        let _ = write!(diag, "{}", script.text());
    }
    result
}

static SIGNAL_SCRIPT: Mutex<Option<PathBuf>> = Mutex::new(None);
static SIGNAL_HOOK: Once = Once::new();

/// SIGINT/SIGTERM terminate the process without running destructors,
/// so the temp script's `Drop` never fires on that path. The handler
/// removes whichever script is currently armed, then exits.
fn arm_signal_cleanup(path: &Path) {
    if let Ok(mut slot) = SIGNAL_SCRIPT.lock() {
        *slot = Some(path.to_path_buf());
    }
    SIGNAL_HOOK.call_once(|| {
        let _ = ctrlc::set_handler(|| {
            remove_armed_script();
            std::process::exit(130);
        });
    });
}

fn remove_armed_script() {
    if let Ok(mut slot) = SIGNAL_SCRIPT.lock() {
        if let Some(path) = slot.take() {
            let _ = fs::remove_file(path);
        }
    }
}

fn disarm_signal_cleanup() {
    if let Ok(mut slot) = SIGNAL_SCRIPT.lock() {
        slot.take();
    }
}

/// Writes the standalone copy requested with `-s` and marks it
/// executable, so the saved script can be re-run directly.
fn save_executable(script: &Script, path: &Path) -> Result<(), GplotError> {
    fs::write(path, script.saveable_text())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o755);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}
