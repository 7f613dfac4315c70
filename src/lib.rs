pub mod args;
pub mod converter;
pub mod encoder;
pub mod error;
pub mod input;
pub mod service;

pub use error::{Error, Result};

use tracing::info;

use crate::args::Config;
use crate::converter::BatchConverter;
use crate::encoder::{Encoder, FfmpegEncoder};

/// Convert every input recording with the configured ffmpeg executable.
pub fn run(config: &Config) -> Result<usize> {
    let encoder = FfmpegEncoder::new(&config.ffmpeg_exe);
    run_with(config, &encoder)
}

/// Same as [`run`], converting through the given encoder.
///
/// Returns the number of files converted. When conversion is disabled nothing
/// is resolved or converted and the result is `Ok(0)`.
pub fn run_with<E: Encoder>(config: &Config, encoder: &E) -> Result<usize> {
    if !config.convert {
        info!("Conversion disabled, nothing to do");
        return Ok(0);
    }

    let files = config.input.resolve()?;

    BatchConverter::new(encoder, config.video_service, &config.converted_dir).convert_all(&files)
}
