use std::path::{Path, PathBuf};

use tracing::info;

use crate::encoder::Encoder;
use crate::error::{Error, Result};
use crate::service::{EncodingProfile, VideoService};

/// One input recording and the file it is converted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    /// Output is `output_dir/<input stem><profile suffix>`
    pub fn new(input: &Path, profile: &EncodingProfile, output_dir: &Path) -> Result<Self> {
        let stem = input.file_stem().ok_or_else(|| Error::NoFileStem {
            path: input.to_path_buf(),
        })?;

        let mut output_name = stem.to_os_string();
        output_name.push(profile.output_suffix);

        Ok(ConversionJob {
            input: input.to_path_buf(),
            output: output_dir.join(output_name),
        })
    }
}

/// Converts a list of recordings one after another.
pub struct BatchConverter<'a, E: Encoder> {
    encoder: &'a E,
    service: VideoService,
    output_dir: &'a Path,
}

impl<'a, E: Encoder> BatchConverter<'a, E> {
    pub fn new(encoder: &'a E, service: VideoService, output_dir: &'a Path) -> Self {
        BatchConverter {
            encoder,
            service,
            output_dir,
        }
    }

    /// Convert every file in order, stopping at the first failure.
    ///
    /// Files converted before a failure are left in place. Returns the number
    /// of files converted.
    pub fn convert_all(&self, files: &[PathBuf]) -> Result<usize> {
        let profile = self.service.profile();

        info!(
            "Converting {} files to {} for {}...",
            files.len(),
            profile.output_suffix,
            self.service
        );

        for input in files {
            let job = ConversionJob::new(input, profile, self.output_dir)?;

            info!(
                "Converting '{}' to '{}'...",
                job.input.display(),
                job.output.display()
            );

            self.encoder.encode(&job, profile)?;
        }

        Ok(files.len())
    }
}
