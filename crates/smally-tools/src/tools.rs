//! External tool detection and management.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// ImageMagick's probe used for picture metadata.
pub const IDENTIFY: &str = "identify";

/// libjpeg's lossless transcoder.
pub const JPEGTRAN: &str = "jpegtran";

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
///
/// A configured path that does not exist is an error rather than a silent
/// fallback to PATH.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::tool_not_found(format!("{} (configured at {})", name, path.display())));
    }

    require_tool(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_tool_not_found() {
        let err = require_tool("nonexistent_tool_12345").unwrap_err();
        assert_eq!(err.to_string(), "tool not found: nonexistent_tool_12345");
    }

    #[test]
    fn test_get_tool_path_prefers_config() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = get_tool_path("nonexistent_tool_12345", Some(file.path())).unwrap();
        assert_eq!(path, file.path());
    }

    #[test]
    fn test_get_tool_path_missing_config_is_error() {
        let err = get_tool_path("jpegtran", Some(Path::new("/nonexistent/jpegtran"))).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/jpegtran"));
    }
}
