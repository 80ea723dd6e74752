use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseFileError {
    #[error("failed to read case file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse case file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported case file format: {path} (expected json, yaml or yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid expected count {value} in '{path}' (expected -1..=4)")]
    InvalidExpected { path: PathBuf, value: i64 },

    #[error("failed to scan case directory '{path}': {source}")]
    DirectoryScanError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl CaseFileError {
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    pub fn invalid_expected(path: impl Into<PathBuf>, value: i64) -> Self {
        Self::InvalidExpected {
            path: path.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CaseFileError::parse_error("/cases/table.json", "missing field `a`");
        assert_eq!(
            err.to_string(),
            "failed to parse case file '/cases/table.json': missing field `a`"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = CaseFileError::unsupported_format("cases.toml");
        assert_eq!(
            err.to_string(),
            "unsupported case file format: cases.toml (expected json, yaml or yml)"
        );
    }

    #[test]
    fn test_invalid_expected_display() {
        let err = CaseFileError::invalid_expected("cases.yaml", 7);
        assert_eq!(
            err.to_string(),
            "invalid expected count 7 in 'cases.yaml' (expected -1..=4)"
        );
    }
}
