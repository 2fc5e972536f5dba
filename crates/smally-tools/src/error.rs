//! Error types for smally-tools.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving external image tools.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external tool exited unsuccessfully.
    #[error("{tool} failed (exit code {}): {message}", exit_code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ToolFailed {
        tool: String,
        exit_code: Option<i32>,
        message: String,
    },

    /// Failed to parse tool output.
    #[error("failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },

    /// The rewritten file does not describe the same picture.
    #[error("verification failed for {}: {message}", path.display())]
    VerificationFailed { path: PathBuf, message: String },

    /// The specified file was not found.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Workspace error.
    #[error("workspace error: {0}")]
    Workspace(String),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(
        tool: impl Into<String>,
        exit_code: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a verification error.
    pub fn verification_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::VerificationFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Exit code reported by the tool, if this error came from one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ToolFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failed_display() {
        let err = Error::tool_failed("jpegtran", Some(2), "Not a JPEG file");
        assert_eq!(
            err.to_string(),
            "jpegtran failed (exit code 2): Not a JPEG file"
        );
        assert_eq!(err.exit_code(), Some(2));

        let err = Error::tool_failed("identify", None, "killed");
        assert_eq!(err.to_string(), "identify failed (exit code none): killed");
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_tool_not_found_display() {
        assert_eq!(
            Error::tool_not_found("jpegtran").to_string(),
            "tool not found: jpegtran"
        );
    }
}
