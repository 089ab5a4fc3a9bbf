// SPDX-License-Identifier: MPL-2.0
use crate::i18n::I18n;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
}

/// Specific error types for image list manifests and gesture scripts.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestError {
    /// The manifest parsed but lists no images.
    Empty,

    /// The TOML could not be parsed into the expected shape.
    Parse(String),

    /// A gesture script step is malformed (step index, reason).
    InvalidStep(usize, String),
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ManifestError::Empty => "error-manifest-empty",
            ManifestError::Parse(_) => "error-manifest-parse",
            ManifestError::InvalidStep(..) => "error-script-invalid-step",
        }
    }

    /// Returns the error message in the current interface language.
    #[must_use]
    pub fn localized(&self, i18n: &I18n) -> String {
        let key = self.i18n_key();
        match self {
            ManifestError::Empty => i18n.tr(key),
            ManifestError::Parse(reason) => i18n.tr_with_args(key, &[("reason", reason.as_str())]),
            ManifestError::InvalidStep(index, reason) => {
                let step = index.to_string();
                i18n.tr_with_args(key, &[("step", step.as_str()), ("reason", reason.as_str())])
            }
        }
    }
}

impl Error {
    /// Returns the error message in the current interface language.
    ///
    /// Only manifest and script errors are translated; I/O and config
    /// errors carry system text and keep their English prefix.
    #[must_use]
    pub fn localized(&self, i18n: &I18n) -> String {
        match self {
            Error::Manifest(err) => err.localized(i18n),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Empty => write!(f, "Manifest lists no images"),
            ManifestError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ManifestError::InvalidStep(index, msg) => {
                write!(f, "Invalid step #{}: {}", index, msg)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
