//! Error types for xbox-report

use thiserror::Error;
use xbox_controller_protocol::XboxError;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    #[error("Invalid report: {0}")]
    InvalidReport(#[from] XboxError),

    #[error("Invalid capture file: {0}")]
    InvalidCapture(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedConfigFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ToolError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidHex(_) | Self::InvalidReport(_) | Self::InvalidCapture(_) => 2,
            Self::InvalidConfiguration(_) | Self::UnsupportedConfigFormat(_) => 3,
            Self::IoError(_) | Self::JsonError(_) => 1,
        }
    }

    /// Short machine-readable name used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidHex(_) => "invalid_hex",
            Self::InvalidReport(_) => "invalid_report",
            Self::InvalidCapture(_) => "invalid_capture",
            Self::InvalidConfiguration(_) => "invalid_config",
            Self::UnsupportedConfigFormat(_) => "unsupported_config_format",
            Self::IoError(_) => "io",
            Self::JsonError(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_class() {
        assert_eq!(ToolError::InvalidHex("zz".to_string()).exit_code(), 2);
        assert_eq!(
            ToolError::from(XboxError::UnknownMessageType(0x08)).exit_code(),
            2
        );
        assert_eq!(
            ToolError::InvalidConfiguration("bad".to_string()).exit_code(),
            3
        );
        assert_eq!(
            ToolError::UnsupportedConfigFormat("toml".to_string()).exit_code(),
            3
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ToolError::from(io).exit_code(), 1);
    }

    #[test]
    fn report_error_message_is_wrapped() {
        let err = ToolError::from(XboxError::InvalidReportSize {
            expected: 20,
            actual: 2,
        });
        assert_eq!(
            err.to_string(),
            "Invalid report: Invalid report size: expected 20, got 2"
        );
        assert_eq!(err.kind(), "invalid_report");
    }
}
