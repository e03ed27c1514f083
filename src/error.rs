//! Crate-level error types.

use std::fmt;

/// Errors produced by the scanmark crate.
///
/// The billboard stages themselves never fail; these cover the layers
/// around them (presets, shader composition).
#[derive(Debug)]
pub enum ScanmarkError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable configuration.
    InvalidOptions(String),
    /// naga_oil failed to register or compose a shader.
    ShaderCompose(String),
    /// A composed shader module did not pass naga validation.
    ShaderValidation(String),
}

impl fmt::Display for ScanmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::ShaderCompose(msg) => {
                write!(f, "shader composition error: {msg}")
            }
            Self::ShaderValidation(msg) => {
                write!(f, "shader validation error: {msg}")
            }
        }
    }
}

impl std::error::Error for ScanmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScanmarkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = ScanmarkError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: missing preset");
    }

    #[test]
    fn message_variants_have_no_source() {
        let err = ScanmarkError::InvalidOptions("near >= mid".to_owned());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "invalid options: near >= mid");
    }
}
