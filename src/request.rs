//! Input validation and output path derivation.

use std::path::{Path, PathBuf};

use crate::error::ValidationError;

/// Extension accepted as input, compared case-insensitively.
pub const SOURCE_EXTENSION: &str = "mov";

/// Extension written by the engine.
pub const TARGET_EXTENSION: &str = "mp4";

/// A validated conversion: the source exists and carries the source
/// extension, the output sits next to it with the target extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConversionRequest {
    /// Validate `path` and derive the output location.
    ///
    /// Nothing is spawned or written here; a rejected path leaves the
    /// filesystem untouched.
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self, ValidationError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(ValidationError::Empty);
        }

        if !path.exists() {
            return Err(ValidationError::NotFound(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(ValidationError::NotAFile(path.to_path_buf()));
        }

        if !is_source_file(path) {
            return Err(ValidationError::WrongExtension(path.to_path_buf()));
        }

        Ok(Self {
            input_path: path.to_path_buf(),
            output_path: derive_output_path(path),
        })
    }
}

/// True when the file name ends in `.mov`, ignoring case.
///
/// Matches on the name rather than `Path::extension` so that a bare
/// `.mov` file name is accepted too.
pub fn is_source_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_lowercase()
                .ends_with(&format!(".{}", SOURCE_EXTENSION))
        })
        .unwrap_or(false)
}

/// Replace the final extension segment with `.mp4`.
pub fn derive_output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref().with_extension(TARGET_EXTENSION)
}
