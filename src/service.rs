use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Encoder settings used when converting a recording for one video service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingProfile {
    pub vcodec: &'static str,
    pub preset: &'static str,
    pub crf: u8,
    pub acodec: &'static str,
    pub pix_fmt: &'static str,
    /// Extension (with leading dot) given to converted files
    pub output_suffix: &'static str,
}

impl EncodingProfile {
    /// Render the settings as ffmpeg output options, sorted by option name.
    pub fn output_args(&self) -> Vec<String> {
        vec![
            "-acodec".to_string(),
            self.acodec.to_string(),
            "-crf".to_string(),
            self.crf.to_string(),
            "-pix_fmt".to_string(),
            self.pix_fmt.to_string(),
            "-preset".to_string(),
            self.preset.to_string(),
            "-vcodec".to_string(),
            self.vcodec.to_string(),
        ]
    }
}

const VIMEO: EncodingProfile = EncodingProfile {
    vcodec: "libx264",
    preset: "veryslow",
    crf: 18,
    acodec: "copy",
    pix_fmt: "yuv420p",
    output_suffix: ".mp4",
};

const YOUTUBE: EncodingProfile = EncodingProfile {
    vcodec: "libx264",
    preset: "veryslow",
    crf: 19,
    acodec: "copy",
    pix_fmt: "yuv420p",
    output_suffix: ".mp4",
};

/// Video services a recording can be prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoService {
    Vimeo,
    Youtube,
}

impl VideoService {
    pub const ALL: [VideoService; 2] = [VideoService::Vimeo, VideoService::Youtube];

    pub fn name(&self) -> &'static str {
        match self {
            VideoService::Vimeo => "vimeo",
            VideoService::Youtube => "youtube",
        }
    }

    pub fn profile(&self) -> &'static EncodingProfile {
        match self {
            VideoService::Vimeo => &VIMEO,
            VideoService::Youtube => &YOUTUBE,
        }
    }

    /// Look up a service by name, ignoring case
    pub fn from_argument(arg: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|service| service.name().eq_ignore_ascii_case(arg))
            .ok_or_else(|| Error::UnknownVideoService {
                name: arg.to_string(),
                expected: Self::ALL.map(|s| s.name()).join(", "),
            })
    }
}

impl FromStr for VideoService {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_argument(s)
    }
}

impl fmt::Display for VideoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
