//! Subprocess execution with captured output.

use crate::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// Captured result of one external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Turn a non-zero exit into [`Error::ToolFailed`].
    ///
    /// The error message is stderr, or stdout when stderr is empty.
    pub fn into_result(self, tool: &str) -> Result<ToolOutput> {
        if self.success() {
            return Ok(self);
        }
        let message = if self.stderr.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            self.stderr.trim().to_string()
        };
        Err(Error::tool_failed(tool, self.exit_code, message))
    }
}

/// Run `program` with `args`, block until it exits and capture its output.
///
/// `tool` is the logical tool name used in errors.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if the executable cannot be launched, or
/// [`Error::Io`] for any other spawn failure. A non-zero exit is *not* an
/// error here; see [`ToolOutput::into_result`].
pub fn run<I, S>(tool: &str, program: &Path, args: I) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!("Running {} ({})", tool, program.display());

    let output = Command::new(program).args(args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found(tool)
        } else {
            Error::Io(e)
        }
    })?;

    Ok(ToolOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(code: Option<i32>, stdout: &str, stderr: &str) -> ToolOutput {
        ToolOutput {
            exit_code: code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_into_result_success() {
        let out = output(Some(0), "ok\n", "").into_result("identify").unwrap();
        assert_eq!(out.stdout, "ok\n");
    }

    #[test]
    fn test_into_result_prefers_stderr() {
        let err = output(Some(1), "noise", "Premature end of JPEG file\n")
            .into_result("jpegtran")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ToolFailed { ref tool, exit_code: Some(1), ref message }
                if tool == "jpegtran" && message == "Premature end of JPEG file"
        ));
    }

    #[test]
    fn test_into_result_signal_has_no_code() {
        let err = output(None, "", "").into_result("jpegtran").unwrap_err();
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_run_missing_program() {
        let err = run(
            "nonexistent",
            Path::new("/nonexistent/dir/nonexistent_tool_12345"),
            ["--version"],
        )
        .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_exit_code_and_streams() {
        let out = run("sh", Path::new("sh"), ["-c", "echo out; echo err >&2; exit 3"]).unwrap();
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.stdout, "out\n");
        assert_eq!(out.stderr, "err\n");
        assert!(!out.success());
    }
}
