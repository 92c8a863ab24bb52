// Media processing boundary
//
// - Commands: builders for the engine invocations this tool issues
// - Processor: ffmpeg-backed implementation of the trait below

pub mod commands;
pub mod processor;

use async_trait::async_trait;
use std::sync::Arc;

pub use commands::*;
pub use processor::*;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::request::ConversionRequest;

/// Main trait for media processing operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaProcessorTrait: Send + Sync {
    /// Run the fixed transcode for a validated request, blocking the task
    /// until the engine exits
    async fn transcode(&self, request: &ConversionRequest) -> Result<EngineOutput>;

    /// Get media processor version information
    async fn get_version_info(&self) -> Result<String>;
}

/// Factory for creating media processor instances
pub struct MediaProcessorFactory;

impl MediaProcessorFactory {
    /// Create the default media processor implementation (FFmpeg-based)
    pub fn create_processor(config: EngineConfig) -> Arc<dyn MediaProcessorTrait> {
        Arc::new(processor::MediaProcessorImpl::new(config))
    }
}
