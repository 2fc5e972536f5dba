//! Scratch space for rewriting a file in place.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// Name prefix of every workspace directory.
///
/// Scanners skip directories with this prefix so leftovers from a killed run
/// are never picked up as pictures.
pub const WORKSPACE_PREFIX: &str = ".smally-";

/// Workspace for rewriting one file.
///
/// Intermediate files live in a hidden temp directory created next to the
/// input, so the final rename stays on one filesystem and replaces the
/// original atomically. Anything left in the directory is removed on drop.
///
/// # Example
///
/// ```no_run
/// use smally_tools::Workspace;
///
/// let workspace = Workspace::new("/photos/IMG_0001.jpg")?;
/// let candidate = workspace.temp_file("optimized.jpg");
/// // ... write the candidate ...
/// workspace.finalize(&candidate, None)?;
/// # Ok::<(), smally_tools::Error>(())
/// ```
pub struct Workspace {
    temp_dir: TempDir,
    input_path: PathBuf,
}

impl Workspace {
    /// Create a new workspace for rewriting `input`.
    pub fn new<P: AsRef<Path>>(input: P) -> Result<Self> {
        let input = input.as_ref();

        if input.file_name().is_none() {
            return Err(Error::InvalidInput(format!(
                "Invalid input file path: {:?}",
                input
            )));
        }

        let parent = match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let temp_dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| Error::Workspace(format!("Failed to create temp dir in {:?}: {}", parent, e)))?;

        Ok(Self {
            temp_dir,
            input_path: input.to_path_buf(),
        })
    }

    /// Get the input file path.
    pub fn input(&self) -> &Path {
        &self.input_path
    }

    /// Get the temp directory path.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a temp file path with the given name.
    pub fn temp_file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Replace the input with `candidate`.
    ///
    /// When `mtime` is given it is stamped on the candidate first, while the
    /// candidate is still writable. The candidate then takes over the input's
    /// permissions and is renamed over it, so a read-only input keeps both its
    /// mode and its mtime. If anything fails the input is left as it was.
    pub fn finalize(self, candidate: &Path, mtime: Option<SystemTime>) -> Result<PathBuf> {
        if !candidate.exists() {
            return Err(Error::Workspace(format!(
                "Output file does not exist: {:?}",
                candidate
            )));
        }

        if let Some(mtime) = mtime {
            fs::File::options()
                .write(true)
                .open(candidate)?
                .set_modified(mtime)?;
        }

        let permissions = fs::metadata(&self.input_path)?.permissions();
        fs::set_permissions(candidate, permissions)?;

        fs::rename(candidate, &self.input_path).map_err(|e| {
            Error::Workspace(format!("Failed to move output over original: {}", e))
        })?;

        Ok(self.input_path)
    }

    /// Clean up without finalizing (discard output).
    pub fn cleanup(self) {
        drop(self.temp_dir);
    }
}
