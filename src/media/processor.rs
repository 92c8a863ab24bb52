use async_trait::async_trait;
use tracing::{info, debug};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::request::ConversionRequest;
use super::{MediaProcessorTrait, EngineOutput, MediaCommandBuilder};

/// Concrete implementation of media processor (FFmpeg-based)
pub struct MediaProcessorImpl {
    command_builder: MediaCommandBuilder,
}

impl MediaProcessorImpl {
    /// Create a new media processor implementation
    pub fn new(config: EngineConfig) -> Self {
        Self {
            command_builder: MediaCommandBuilder::new(config.binary_path),
        }
    }
}

#[async_trait]
impl MediaProcessorTrait for MediaProcessorImpl {
    async fn transcode(&self, request: &ConversionRequest) -> Result<EngineOutput> {
        info!("Converting {} -> {}",
              request.input_path.display(), request.output_path.display());

        let command = self.command_builder.transcode(&request.input_path, &request.output_path);
        let output = command.execute().await?;

        info!("Conversion completed successfully");
        Ok(output)
    }

    async fn get_version_info(&self) -> Result<String> {
        debug!("Getting media processor version information");

        let output = self.command_builder.version_check().execute().await?;
        // First line carries the version, e.g. "ffmpeg version 6.1 Copyright ..."
        let first_line = output.stdout.lines().next().unwrap_or("Unknown version");
        Ok(first_line.to_string())
    }
}
