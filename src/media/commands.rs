use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

use crate::error::{ConvertError, Result};

/// Video encoder used for every conversion.
pub const VIDEO_CODEC: &str = "libx264";

/// Audio encoder used for every conversion.
pub const AUDIO_CODEC: &str = "aac";

/// Abstract media processing command representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCommand {
    pub binary_path: String,
    /// Kept as OS strings so non-UTF-8 file names reach the engine intact
    pub args: Vec<OsString>,
    pub description: String,
}

/// Everything the engine gave back: exit status plus both streams,
/// decoded lossily as UTF-8.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl MediaCommand {
    /// Create a new media processing command
    pub fn new<S1: Into<String>, S2: Into<String>>(binary_path: S1, description: S2) -> Self {
        Self {
            binary_path: binary_path.into(),
            args: Vec::new(),
            description: description.into(),
        }
    }

    /// Add an argument
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add input file
    pub fn input<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg("-i").arg(path.as_ref().as_os_str())
    }

    /// Add output file
    pub fn output<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg(path.as_ref().as_os_str())
    }

    /// Force overwrite output
    pub fn overwrite(self) -> Self {
        self.arg("-y")
    }

    /// Set video codec
    pub fn video_codec<S: AsRef<OsStr>>(self, codec: S) -> Self {
        self.arg("-c:v").arg(codec)
    }

    /// Set audio codec
    pub fn audio_codec<S: AsRef<OsStr>>(self, codec: S) -> Self {
        self.arg("-c:a").arg(codec)
    }

    /// Spawn the engine, capture both streams and wait for it to exit.
    ///
    /// There is no timeout: a hung engine hangs the caller. A nonzero exit
    /// is not an error at this level; see [`MediaCommand::execute`].
    pub async fn run(&self) -> Result<EngineOutput> {
        debug!("Executing media processing command: {} {:?}", self.binary_path, self.args);
        debug!("Description: {}", self.description);

        let output = Command::new(&self.binary_path)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                ConvertError::Unexpected(format!(
                    "Failed to execute media processor '{}': {}",
                    self.binary_path, e
                ))
            })?;

        Ok(EngineOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Execute the command, turning a nonzero exit into an engine error
    /// that carries the captured streams.
    pub async fn execute(&self) -> Result<EngineOutput> {
        let output = self.run().await?;

        if !output.status.success() {
            debug!("{} failed with {}", self.description, output.status);
            return Err(ConvertError::Engine {
                exit_code: output.status.code(),
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        Ok(output)
    }
}

/// Builder for the commands this tool issues
pub struct MediaCommandBuilder {
    binary_path: String,
}

impl MediaCommandBuilder {
    /// Create a new command builder
    pub fn new<S: Into<String>>(binary_path: S) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }

    /// Build the fixed .mov -> .mp4 transcode: H.264 video, AAC audio,
    /// existing output overwritten.
    pub fn transcode<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> MediaCommand {
        MediaCommand::new(&self.binary_path, "MOV to MP4 conversion")
            .overwrite()
            .input(input_path)
            .video_codec(VIDEO_CODEC)
            .audio_codec(AUDIO_CODEC)
            .output(output_path)
    }

    /// Build version check command
    pub fn version_check(&self) -> MediaCommand {
        MediaCommand::new(&self.binary_path, "Version check")
            .arg("-version")
    }
}
