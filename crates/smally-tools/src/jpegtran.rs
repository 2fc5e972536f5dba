//! Lossless JPEG optimisation with `jpegtran`.

use crate::command;
use crate::probe::Prober;
use crate::tools::{get_tool_path, JPEGTRAN};
use crate::{Error, Result, Workspace};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Which markers `jpegtran -copy` keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyMode {
    None,
    Comments,
    Icc,
    #[default]
    All,
}

impl CopyMode {
    fn as_arg(&self) -> &'static str {
        match self {
            CopyMode::None => "none",
            CopyMode::Comments => "comments",
            CopyMode::Icc => "icc",
            CopyMode::All => "all",
        }
    }
}

/// Options for [`Transcoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeOptions {
    pub copy: CopyMode,
    /// Also produce a progressive candidate and keep whichever is smaller.
    pub progressive: bool,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            copy: CopyMode::All,
            progressive: true,
        }
    }
}

/// Outcome of a successful [`Transcoder::transcode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transcoded {
    /// The file was rewritten with a smaller encoding.
    Replaced { original_size: u64, new_size: u64 },
    /// No candidate beat the original; the file was not touched.
    Unchanged { original_size: u64 },
}

/// Lossless in-place JPEG optimiser.
#[derive(Debug, Clone)]
pub struct Transcoder {
    program: PathBuf,
    options: TranscodeOptions,
    verifier: Option<Prober>,
}

impl Transcoder {
    /// Use the `jpegtran` at `program`.
    pub fn new(program: impl Into<PathBuf>, options: TranscodeOptions) -> Self {
        Self {
            program: program.into(),
            options,
            verifier: None,
        }
    }

    /// Resolve `jpegtran` from a configured path or PATH.
    pub fn locate(configured: Option<&Path>, options: TranscodeOptions) -> Result<Self> {
        get_tool_path(JPEGTRAN, configured).map(|p| Self::new(p, options))
    }

    /// Probe every candidate and require the original's dimensions before
    /// it may replace the original.
    pub fn with_verifier(mut self, prober: Prober) -> Self {
        self.verifier = Some(prober);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Losslessly optimise `path` in place.
    ///
    /// Symlinks are resolved first, so the link stays a link and its target
    /// is the file that gets rewritten. Candidates are written into a
    /// [`Workspace`] next to that target. The smallest one replaces it only
    /// if it is strictly smaller, carrying `mtime` when one is given. On any
    /// error the original is left untouched.
    pub fn transcode(&self, path: &Path, mtime: Option<SystemTime>) -> Result<Transcoded> {
        let not_found = |e: std::io::Error| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path)
            } else {
                Error::Io(e)
            }
        };
        let target = std::fs::canonicalize(path).map_err(not_found)?;
        let original_size = std::fs::metadata(&target).map_err(not_found)?.len();

        let workspace = Workspace::new(&target)?;

        let mut best: Option<(PathBuf, u64)> = None;
        for progressive in self.passes() {
            let name = if progressive { "progressive.jpg" } else { "optimized.jpg" };
            let candidate = workspace.temp_file(name);
            self.run_pass(&target, &candidate, progressive)?;

            let size = std::fs::metadata(&candidate)
                .map_err(|e| {
                    Error::tool_failed(JPEGTRAN, Some(0), format!("no output written: {}", e))
                })?
                .len();

            #[cfg(feature = "tracing")]
            tracing::trace!("{} candidate for {:?}: {} bytes", name, path, size);

            if size > 0 && best.as_ref().map_or(true, |(_, s)| size < *s) {
                best = Some((candidate, size));
            }
        }

        let Some((candidate, new_size)) = best else {
            return Err(Error::tool_failed(JPEGTRAN, Some(0), "produced an empty file"));
        };

        if new_size >= original_size {
            workspace.cleanup();
            return Ok(Transcoded::Unchanged { original_size });
        }

        if let Some(prober) = &self.verifier {
            let before = prober.probe(&target)?;
            let after = prober.probe(&candidate)?;
            if !before.same_dimensions(&after) {
                return Err(Error::verification_failed(
                    path,
                    format!(
                        "dimensions changed from {}x{} to {}x{}",
                        before.width, before.height, after.width, after.height
                    ),
                ));
            }
        }

        workspace.finalize(&candidate, mtime)?;

        Ok(Transcoded::Replaced {
            original_size,
            new_size,
        })
    }

    fn passes(&self) -> Vec<bool> {
        if self.options.progressive {
            vec![false, true]
        } else {
            vec![false]
        }
    }

    fn run_pass(&self, input: &Path, output: &Path, progressive: bool) -> Result<()> {
        let mut args: Vec<&OsStr> = vec![
            OsStr::new("-copy"),
            OsStr::new(self.options.copy.as_arg()),
            OsStr::new("-optimize"),
        ];
        if progressive {
            args.push(OsStr::new("-progressive"));
        }
        args.push(OsStr::new("-outfile"));
        args.push(output.as_os_str());
        args.push(input.as_os_str());

        command::run(JPEGTRAN, &self.program, args)?.into_result(JPEGTRAN)?;
        Ok(())
    }
}
