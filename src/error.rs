use std::path::PathBuf;
use thiserror::Error;

/// Reasons a path is rejected before the engine is ever started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a file first!")]
    Empty,

    #[error("File {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("Input file must be a .mov file: {}", .0.display())]
    WrongExtension(PathBuf),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Engine exited with {}: {stderr}", describe_exit(.exit_code))]
    Engine {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("{0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification used by reporters and exit handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Engine,
    Unexpected,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Engine => "engine",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Validation(_) => ErrorKind::Validation,
            ConvertError::Engine { .. } => ErrorKind::Engine,
            ConvertError::Unexpected(_) | ConvertError::Config(_) => ErrorKind::Unexpected,
        }
    }

    /// Text shown to the user: the engine's error stream for engine
    /// failures, the error message otherwise.
    pub fn diagnostic_text(&self) -> String {
        match self {
            ConvertError::Engine { stderr, .. } => stderr.clone(),
            ConvertError::Validation(reason) => reason.to_string(),
            other => other.to_string(),
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let validation = ConvertError::from(ValidationError::Empty);
        assert_eq!(validation.kind(), ErrorKind::Validation);

        let engine = ConvertError::Engine {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "boom".to_string(),
        };
        assert_eq!(engine.kind(), ErrorKind::Engine);

        let spawn = ConvertError::Unexpected("Permission denied (os error 13)".into());
        assert_eq!(spawn.kind(), ErrorKind::Unexpected);
        assert_eq!(ConvertError::Config("bad".into()).kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_engine_diagnostic_is_stderr_verbatim() {
        let err = ConvertError::Engine {
            exit_code: None,
            stdout: "ignored".to_string(),
            stderr: "line one\nline two\n".to_string(),
        };
        assert_eq!(err.diagnostic_text(), "line one\nline two\n");
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::WrongExtension(PathBuf::from("/tmp/clip.avi"));
        assert_eq!(err.to_string(), "Input file must be a .mov file: /tmp/clip.avi");

        let err = ValidationError::NotFound(PathBuf::from("missing.mov"));
        assert_eq!(err.to_string(), "File missing.mov does not exist");
    }
}
