use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving inputs and converting recordings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested video service is not one of the known services.
    #[error("unknown video service '{name}' (expected one of: {expected})")]
    UnknownVideoService { name: String, expected: String },

    /// Walking the input directory failed.
    #[error("failed to scan input directory {}", dir.display())]
    Walk {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An input path has no file name to derive the output name from.
    #[error("cannot derive an output name from {}", path.display())]
    NoFileStem { path: PathBuf },

    /// The encoder executable could not be started.
    #[error("failed to run encoder {}", exe.display())]
    EncoderSpawn {
        exe: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoder ran but did not exit successfully.
    #[error("encoder failed on {} ({status})", input.display())]
    EncoderFailed { input: PathBuf, status: ExitStatus },
}
