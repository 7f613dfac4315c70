use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::converter::ConversionJob;
use crate::error::{Error, Result};
use crate::service::EncodingProfile;

/// Runs a single conversion to completion.
pub trait Encoder {
    fn encode(&self, job: &ConversionJob, profile: &EncodingProfile) -> Result<()>;
}

/// Converts recordings by running an ffmpeg executable.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    exe: PathBuf,
}

impl FfmpegEncoder {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        FfmpegEncoder { exe: exe.into() }
    }

    /// Build the ffmpeg invocation for one job.
    ///
    /// stdio is inherited so ffmpeg's progress and any overwrite prompt reach
    /// the terminal.
    pub fn command(&self, job: &ConversionJob, profile: &EncodingProfile) -> Command {
        let mut command = Command::new(&self.exe);
        command
            .arg("-i")
            .arg(&job.input)
            .args(profile.output_args())
            .arg(&job.output);
        command
    }
}

impl Encoder for FfmpegEncoder {
    fn encode(&self, job: &ConversionJob, profile: &EncodingProfile) -> Result<()> {
        let mut command = self.command(job, profile);

        debug!(
            "Executing: {} {}",
            command.get_program().to_string_lossy(),
            command
                .get_args()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = command.status().map_err(|source| Error::EncoderSpawn {
            exe: self.exe.clone(),
            source,
        })?;

        if !status.success() {
            return Err(Error::EncoderFailed {
                input: job.input.clone(),
                status,
            });
        }

        Ok(())
    }
}
