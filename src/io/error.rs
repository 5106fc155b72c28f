//! Error types for validation and training pipeline failures

use std::fmt;
use std::path::PathBuf;

/// Main error type for all training operations
#[derive(Debug)]
pub enum TrainerError {
    /// A required file or directory does not exist
    MissingPath {
        /// What the path was supposed to be
        role: &'static str,
        /// Path that was checked
        path: PathBuf,
    },

    /// Language code is not a single plain file name component
    InvalidLanguage {
        /// The rejected language code
        language: String,
    },

    /// Font name is not usable as a training identifier
    InvalidFontName {
        /// The rejected font name
        name: String,
    },

    /// Font has no entry in the font properties file
    UnregisteredFont {
        /// The font name that was looked up
        name: String,
        /// Properties file that was searched
        properties: PathBuf,
    },

    /// A toolchain program could not be started
    ToolNotFound {
        /// Program that failed to launch
        program: String,
        /// Underlying launch error
        source: std::io::Error,
    },

    /// A toolchain program exited unsuccessfully
    CommandFailed {
        /// Program that failed
        program: String,
        /// Exit code, absent when terminated by a signal
        code: Option<i32>,
        /// Trailing lines of captured stderr
        stderr: String,
    },

    /// A pipeline step completed without producing an expected file
    MissingArtifact {
        /// Pipeline step that should have produced the file
        step: &'static str,
        /// Expected location
        path: PathBuf,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath { role, path } => {
                write!(f, "The {} {role} does not exist. Aborting.", path.display())
            }
            Self::InvalidLanguage { language } => {
                write!(
                    f,
                    "The --tesseract-lang / -l argument must be a plain name without path separators or spaces (got '{language}'). Aborting."
                )
            }
            Self::InvalidFontName { name } => {
                write!(
                    f,
                    "The --font-name / -n argument must not contain any spaces (got '{name}'). Aborting."
                )
            }
            Self::UnregisteredFont { name, properties } => {
                write!(
                    f,
                    "The font properties of {name} have not been defined in {}. Aborting.",
                    properties.display()
                )
            }
            Self::ToolNotFound { program, source } => {
                write!(f, "Could not launch '{program}': {source}")
            }
            Self::CommandFailed {
                program,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "'{program}' exited with status {code}")?,
                    None => write!(f, "'{program}' was terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, "\n{stderr}")?;
                }
                Ok(())
            }
            Self::MissingArtifact { step, path } => {
                write!(f, "The {step} step did not produce '{}'", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TrainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ToolNotFound { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl TrainerError {
    /// Whether the error was raised before any pipeline step ran
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingPath { .. }
                | Self::InvalidLanguage { .. }
                | Self::InvalidFontName { .. }
                | Self::UnregisteredFont { .. }
        )
    }
}

/// Convenience type alias for training results
pub type Result<T> = std::result::Result<T, TrainerError>;

impl From<std::io::Error> for TrainerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a missing path error
pub fn missing_path(role: &'static str, path: impl Into<PathBuf>) -> TrainerError {
    TrainerError::MissingPath {
        role,
        path: path.into(),
    }
}

/// Create a file system error bound to a path and operation
pub fn file_system(
    operation: &'static str,
    path: impl Into<PathBuf>,
    source: std::io::Error,
) -> TrainerError {
    TrainerError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

/// Attach path and operation details to I/O results
pub trait WithPath<T> {
    /// Map an I/O error into a [`TrainerError::FileSystem`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, operation: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, operation: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| file_system(operation, path, source))
    }
}
