//! Error handling for configuration loading and workspace construction

use std::io;

/// Unified error to report failures while reading configuration files or
/// assembling the workspace region from parameters.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    InvalidLength { field: String, expected: usize, found: usize },
    InvalidRegion(String),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::InvalidLength { ref field, expected, found } =>
                write!(f, "Invalid Length of {}: expected {}, found {}", field, expected, found),
            ParameterError::InvalidRegion(ref msg) =>
                write!(f, "Invalid Workspace Region: {}", msg),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = ParameterError::InvalidLength { field: "home_position".to_string(), expected: 3, found: 2 };
        assert_eq!(err.to_string(), "Invalid Length of home_position: expected 3, found 2");
    }

    #[test]
    fn test_io_error_is_source() {
        let err: ParameterError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("IO Error"));
    }
}
