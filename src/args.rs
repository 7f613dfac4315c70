use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::input::InputSource;
use crate::service::VideoService;

/// Two-letter single-dash flags and the long flags they stand for.
///
/// clap only knows single-character short flags, so these are rewritten
/// before parsing.
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-vs", "--video-service"),
    ("-if", "--input-file"),
    ("-id", "--input-directory"),
    ("-is", "--input-suffix"),
    ("-cd", "--converted-directory"),
    ("-fe", "--ffmpeg-exe"),
    ("-nc", "--no-convert"),
];

#[derive(Parser, Debug)]
#[command(
    name = "upload_recording",
    version,
    about = "Uploads OBS video recordings to a video service."
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["input_file", "input_directory"])
))]
pub struct Args {
    /// Video service to which to upload the recording (vimeo, youtube) [alias: -vs]
    #[arg(long, value_name = "SERVICE")]
    pub video_service: VideoService,

    /// Video file(s) to upload [alias: -if]
    #[arg(long, value_name = "FILE", num_args = 1..)]
    pub input_file: Vec<PathBuf>,

    /// Directory containing video files to upload [alias: -id]
    #[arg(long, value_name = "DIR")]
    pub input_directory: Option<PathBuf>,

    /// Suffix for video files in the input directory [alias: -is]
    #[arg(long, value_name = "SUFFIX", default_value = ".mkv", allow_hyphen_values = true)]
    pub input_suffix: String,

    /// Path where converted video files are saved [default: current directory] [alias: -cd]
    #[arg(long, value_name = "DIR")]
    pub converted_directory: Option<PathBuf>,

    /// Path to the ffmpeg executable [alias: -fe]
    #[arg(long, value_name = "PATH", default_value = "./ffmpeg/bin/ffmpeg")]
    pub ffmpeg_exe: PathBuf,

    /// If set, input videos will not be converted [alias: -nc]
    #[arg(long)]
    pub no_convert: bool,
}

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub video_service: VideoService,
    pub input: InputSource,
    pub converted_dir: PathBuf,
    pub ffmpeg_exe: PathBuf,
    pub convert: bool,
}

impl Args {
    /// Parse the process arguments, exiting with a usage error if they are invalid
    pub fn from_env() -> Self {
        Self::parse_from(expand_legacy_flags(std::env::args_os()))
    }

    /// Parse and validate an argument list (first item is the program name)
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(expand_legacy_flags(args))
    }

    pub fn into_config(self) -> Result<Config> {
        // The arg group guarantees exactly one input mode is present
        let input = match self.input_directory {
            Some(dir) => InputSource::Directory {
                dir,
                suffix: self.input_suffix,
            },
            None => InputSource::Files(self.input_file),
        };

        let converted_dir = match self.converted_directory {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        Ok(Config {
            video_service: self.video_service,
            input,
            converted_dir,
            ffmpeg_exe: self.ffmpeg_exe,
            convert: !self.no_convert,
        })
    }
}

/// Rewrite `-vs`, `-if`, ... (and `-vs=value`) to their long forms.
///
/// Everything after a bare `--` is passed through untouched.
pub fn expand_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut expanded = Vec::new();
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();

        if passthrough {
            expanded.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            expanded.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            expanded.push(arg);
            continue;
        }

        let (flag, value) = match text.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (text, None),
        };

        match LEGACY_FLAGS.iter().find(|(short, _)| *short == flag) {
            Some((_, long)) => match value {
                Some(value) => expanded.push(format!("{long}={value}").into()),
                None => expanded.push((*long).into()),
            },
            None => expanded.push(arg),
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_args(std::iter::once("upload_recording").chain(args.iter().copied()))
    }

    #[test]
    fn test_long_flags() {
        let args = parse(&[
            "--video-service",
            "vimeo",
            "--input-file",
            "rec.mkv",
            "--converted-directory",
            "out/",
        ])
        .unwrap();

        assert_eq!(args.video_service, VideoService::Vimeo);
        assert_eq!(args.input_file, vec![PathBuf::from("rec.mkv")]);
        assert_eq!(args.converted_directory, Some(PathBuf::from("out/")));
        assert_eq!(args.input_suffix, ".mkv");
        assert_eq!(args.ffmpeg_exe, PathBuf::from("./ffmpeg/bin/ffmpeg"));
        assert!(!args.no_convert);
    }

    #[test]
    fn test_legacy_short_flags() {
        let args = parse(&[
            "-vs", "YouTube", "-id", "recordings", "-is", ".flv", "-cd", "out", "-fe",
            "/usr/bin/ffmpeg", "-nc",
        ])
        .unwrap();

        assert_eq!(args.video_service, VideoService::Youtube);
        assert_eq!(args.input_directory, Some(PathBuf::from("recordings")));
        assert_eq!(args.input_suffix, ".flv");
        assert_eq!(args.converted_directory, Some(PathBuf::from("out")));
        assert_eq!(args.ffmpeg_exe, PathBuf::from("/usr/bin/ffmpeg"));
        assert!(args.no_convert);
    }

    #[test]
    fn test_legacy_flag_with_equals() {
        let args = parse(&["-vs=vimeo", "-if=a.mkv"]).unwrap();
        assert_eq!(args.video_service, VideoService::Vimeo);
        assert_eq!(args.input_file, vec![PathBuf::from("a.mkv")]);
    }

    #[test]
    fn test_multiple_input_files() {
        let args = parse(&["-vs", "vimeo", "-if", "a.mkv", "b.mkv", "c.mkv"]).unwrap();
        assert_eq!(
            args.input_file,
            vec![
                PathBuf::from("a.mkv"),
                PathBuf::from("b.mkv"),
                PathBuf::from("c.mkv")
            ]
        );
    }

    #[test]
    fn test_unknown_service_is_rejected() {
        let err = parse(&["-vs", "twitch", "-if", "a.mkv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_service_is_required() {
        let err = parse(&["-if", "a.mkv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_input_modes_are_exclusive() {
        let err = parse(&["-vs", "vimeo", "-if", "a.mkv", "-id", "recordings"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_an_input_mode_is_required() {
        let err = parse(&["-vs", "vimeo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_expand_leaves_other_arguments_alone() {
        let expanded = expand_legacy_flags(["prog", "-vsx", "--", "-vs", "value"]);
        assert_eq!(expanded, ["prog", "-vsx", "--", "-vs", "value"].map(OsString::from));
    }

    #[test]
    fn test_config_from_directory_args() {
        let config = parse(&["-vs", "vimeo", "-id", "recordings", "-cd", "out"])
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(
            config,
            Config {
                video_service: VideoService::Vimeo,
                input: InputSource::Directory {
                    dir: PathBuf::from("recordings"),
                    suffix: ".mkv".to_string(),
                },
                converted_dir: PathBuf::from("out"),
                ffmpeg_exe: PathBuf::from("./ffmpeg/bin/ffmpeg"),
                convert: true,
            }
        );
    }

    #[test]
    fn test_config_defaults_to_current_directory() {
        let config = parse(&["-vs", "vimeo", "-if", "a.mkv", "-nc"])
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(config.input, InputSource::Files(vec![PathBuf::from("a.mkv")]));
        assert_eq!(config.converted_dir, std::env::current_dir().unwrap());
        assert!(config.converted_dir.is_absolute());
        assert!(!config.convert);
    }
}
