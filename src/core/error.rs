use thiserror::Error;

#[derive(Debug, Error)]
pub enum GplotError {
    #[error("gnuplot binary not found in PATH")]
    EngineNotFound,
    #[error("gnuplot exited with status {exit_code:?}")]
    EngineFailed { exit_code: Option<i32> },
    #[error("missing value for -{flag}")]
    MissingValue { flag: char },
    #[error("no input file pattern given")]
    NoInputPattern,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GplotError {
    /// Exit code for the wrapper process. Engine failures propagate the
    /// engine's own code; usage errors exit 2 like getopt tools do.
    pub fn exit_code(&self) -> i32 {
        match self {
            GplotError::EngineFailed {
                exit_code: Some(code),
            } => *code,
            GplotError::MissingValue { .. } | GplotError::NoInputPattern => 2,
            _ => 1,
        }
    }
}
