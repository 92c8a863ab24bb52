//! Turning a finished conversion into something a person (or a script) can read.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ErrorKind};

/// Outcome of one request: either the output file or the error that stopped it.
#[derive(Debug)]
pub enum ConversionResult {
    Converted { output_path: PathBuf },
    Failed(ConvertError),
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Converted { .. })
    }

    pub fn output_path(&self) -> Option<&Path> {
        match self {
            ConversionResult::Converted { output_path } => Some(output_path),
            ConversionResult::Failed(_) => None,
        }
    }

    pub fn diagnostic_text(&self) -> Option<String> {
        match self {
            ConversionResult::Converted { .. } => None,
            ConversionResult::Failed(err) => Some(err.diagnostic_text()),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ConversionResult::Converted { .. } => None,
            ConversionResult::Failed(err) => Some(err.kind()),
        }
    }

    pub fn to_report(&self, input_path: &Path) -> ConversionReport {
        ConversionReport {
            success: self.is_success(),
            input_path: input_path.to_path_buf(),
            output_path: self.output_path().map(Path::to_path_buf),
            error_kind: self.error_kind().map(|kind| kind.as_str()),
            diagnostic: self.diagnostic_text(),
        }
    }
}

impl From<crate::error::Result<PathBuf>> for ConversionResult {
    fn from(result: crate::error::Result<PathBuf>) -> Self {
        match result {
            Ok(output_path) => ConversionResult::Converted { output_path },
            Err(err) => ConversionResult::Failed(err),
        }
    }
}

/// Flat, serializable view of a [`ConversionResult`] for `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub success: bool,
    pub input_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// Console text for a finished conversion. Success goes to stdout,
/// failures to stderr.
pub fn console_message(input_path: &Path, result: &ConversionResult) -> (bool, String) {
    match result {
        ConversionResult::Converted { output_path } => (
            true,
            format!(
                "Successfully converted {} to {}",
                input_path.display(),
                output_path.display()
            ),
        ),
        ConversionResult::Failed(ConvertError::Engine { stdout, stderr, .. }) => (
            false,
            format!(
                "Error converting {}:\nstdout: {}\nstderr: {}",
                input_path.display(),
                stdout,
                stderr
            ),
        ),
        ConversionResult::Failed(ConvertError::Validation(reason)) => {
            (false, format!("Error: {}", reason))
        }
        ConversionResult::Failed(err) => (
            false,
            format!("Error converting {}: {}", input_path.display(), err),
        ),
    }
}

pub fn print_console(input_path: &Path, result: &ConversionResult) {
    let (ok, message) = console_message(input_path, result);
    if ok {
        println!("{}", message);
    } else {
        eprintln!("{}", message);
    }
}

pub fn print_json(input_path: &Path, result: &ConversionResult) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(&result.to_report(input_path))?);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Error,
}

/// A modal message for the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub title: String,
    pub body: String,
}

impl Dialog {
    pub fn error<S: Into<String>>(body: S) -> Self {
        Self {
            level: DialogLevel::Error,
            title: "Error".to_string(),
            body: body.into(),
        }
    }

    pub fn for_result(result: &ConversionResult) -> Self {
        match result {
            ConversionResult::Converted { output_path } => Self {
                level: DialogLevel::Info,
                title: "Success".to_string(),
                body: format!(
                    "File converted successfully!\nSaved as: {}",
                    output_path.display()
                ),
            },
            ConversionResult::Failed(ConvertError::Engine { stderr, .. }) => {
                Self::error(format!("FFmpeg error:\n{}", stderr))
            }
            ConversionResult::Failed(err) => Self::error(err.diagnostic_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn engine_failure() -> ConversionResult {
        ConversionResult::Failed(ConvertError::Engine {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "boom".to_string(),
        })
    }

    #[test]
    fn test_success_accessors() {
        let result = ConversionResult::Converted { output_path: PathBuf::from("/a/b/clip.mp4") };
        assert!(result.is_success());
        assert_eq!(result.output_path(), Some(Path::new("/a/b/clip.mp4")));
        assert_eq!(result.diagnostic_text(), None);
        assert_eq!(result.error_kind(), None);
    }

    #[test]
    fn test_failure_accessors() {
        let result = engine_failure();
        assert!(!result.is_success());
        assert_eq!(result.output_path(), None);
        assert_eq!(result.diagnostic_text().as_deref(), Some("boom"));
        assert_eq!(result.error_kind(), Some(ErrorKind::Engine));
    }

    #[test]
    fn test_console_messages() {
        let input = Path::new("/a/b/clip.mov");

        let ok = ConversionResult::Converted { output_path: PathBuf::from("/a/b/clip.mp4") };
        assert_eq!(
            console_message(input, &ok),
            (true, "Successfully converted /a/b/clip.mov to /a/b/clip.mp4".to_string())
        );

        let (ok, text) = console_message(input, &engine_failure());
        assert!(!ok);
        assert!(text.starts_with("Error converting /a/b/clip.mov:"));
        assert!(text.ends_with("stderr: boom"));

        let invalid = ConversionResult::Failed(ValidationError::Empty.into());
        assert_eq!(
            console_message(input, &invalid),
            (false, "Error: Please select a file first!".to_string())
        );
    }

    #[test]
    fn test_json_report_shape() {
        let report = engine_failure().to_report(Path::new("clip.mov"));
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error_kind"], "engine");
        assert_eq!(value["diagnostic"], "boom");
        assert!(value.get("output_path").is_none());
    }

    #[test]
    fn test_dialogs() {
        let ok = ConversionResult::Converted { output_path: PathBuf::from("clip.mp4") };
        let dialog = Dialog::for_result(&ok);
        assert_eq!(dialog.level, DialogLevel::Info);
        assert_eq!(dialog.body, "File converted successfully!\nSaved as: clip.mp4");

        let dialog = Dialog::for_result(&engine_failure());
        assert_eq!(dialog.level, DialogLevel::Error);
        assert_eq!(dialog.body, "FFmpeg error:\nboom");

        let unexpected = ConversionResult::Failed(ConvertError::Unexpected("permission denied".into()));
        assert_eq!(Dialog::for_result(&unexpected).body, "permission denied");
    }
}
