use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::media::{MediaProcessorFactory, MediaProcessorTrait};
use crate::report::ConversionResult;
use crate::request::ConversionRequest;

/// Resolve, build, run, report: one request at a time.
#[derive(Clone)]
pub struct Workflow {
    media: Arc<dyn MediaProcessorTrait>,
}

impl Workflow {
    pub fn new(config: &Config) -> Self {
        Self::with_processor(MediaProcessorFactory::create_processor(config.engine.clone()))
    }

    pub fn with_processor(media: Arc<dyn MediaProcessorTrait>) -> Self {
        Self { media }
    }

    pub fn media(&self) -> &Arc<dyn MediaProcessorTrait> {
        &self.media
    }

    /// Convert a single .mov file, returning the written .mp4 path.
    pub async fn process_single_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        info!("Processing single file: {}", input_path.display());

        let request = ConversionRequest::resolve(input_path)?;
        self.run_request(&request).await
    }

    /// Run an already validated request.
    pub async fn run_request(&self, request: &ConversionRequest) -> Result<PathBuf> {
        if request.output_path.exists() {
            info!("Overwriting existing {}", request.output_path.display());
        }

        self.media.transcode(request).await?;
        Ok(request.output_path.clone())
    }

    /// Same as [`Workflow::process_single_file`] but never fails: every
    /// error is folded into the result.
    pub async fn convert<P: AsRef<Path>>(&self, input_path: P) -> ConversionResult {
        let input_path = input_path.as_ref();
        let result = ConversionResult::from(self.process_single_file(input_path).await);

        if let ConversionResult::Failed(err) = &result {
            warn!("Failed to convert {}: {}", input_path.display(), err);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConvertError, ErrorKind, ValidationError};
    use crate::media::{EngineOutput, MockMediaProcessorTrait};
    use tempfile::tempdir;

    fn never_called() -> Workflow {
        let mut mock = MockMediaProcessorTrait::new();
        mock.expect_transcode().times(0);
        Workflow::with_processor(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_missing_file_never_invokes_engine() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ghost.mov");

        let result = never_called().convert(&input).await;
        assert_eq!(result.error_kind(), Some(ErrorKind::Validation));
        assert!(!dir.path().join("ghost.mp4").exists());
    }

    #[tokio::test]
    async fn test_wrong_extension_never_invokes_engine() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("clip.mkv");
        std::fs::write(&input, b"").unwrap();

        let result = never_called().convert(&input).await;
        match result {
            ConversionResult::Failed(ConvertError::Validation(ValidationError::WrongExtension(p))) => {
                assert_eq!(p, input);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_engine_error_is_propagated() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("clip.mov");
        std::fs::write(&input, b"").unwrap();

        let mut mock = MockMediaProcessorTrait::new();
        mock.expect_transcode().times(1).returning(|_| {
            Err(ConvertError::Engine {
                exit_code: Some(69),
                stdout: String::new(),
                stderr: "Invalid data found when processing input".to_string(),
            })
        });

        let result = Workflow::with_processor(Arc::new(mock)).convert(&input).await;
        assert_eq!(
            result.diagnostic_text().as_deref(),
            Some("Invalid data found when processing input")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_reports_derived_path() {
        use std::os::unix::process::ExitStatusExt;

        let dir = tempdir().unwrap();
        let input = dir.path().join("clip.mov");
        std::fs::write(&input, b"").unwrap();
        let expected = dir.path().join("clip.mp4");

        let mut mock = MockMediaProcessorTrait::new();
        let check = expected.clone();
        mock.expect_transcode()
            .withf(move |request| request.output_path == check)
            .times(1)
            .returning(|_| {
                Ok(EngineOutput {
                    status: std::process::ExitStatus::from_raw(0),
                    stdout: String::new(),
                    stderr: String::new(),
                })
            });

        let result = Workflow::with_processor(Arc::new(mock)).convert(&input).await;
        assert!(result.is_success());
        assert_eq!(result.output_path(), Some(expected.as_path()));
    }
}
