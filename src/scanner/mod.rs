//! Picture file discovery.
//!
//! Walks the configured roots and yields a [`FileCandidate`] for every
//! regular file whose extension is selected.

use smally_common::{ExtensionSet, ImageFormat};
use smally_tools::WORKSPACE_PREFIX;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{trace, warn};
use walkdir::{DirEntry, WalkDir};

/// A selected file, as seen by the filesystem at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub format: ImageFormat,
    /// Lower-cased extension without the dot.
    pub extension: String,
    /// Size in bytes.
    pub size: u64,
    pub modified: SystemTime,
}

impl FileCandidate {
    fn from_entry(entry: &DirEntry, extensions: &ExtensionSet) -> Option<Self> {
        let format = extensions.match_path(entry.path())?;
        match entry.metadata() {
            Ok(metadata) => Self::with_metadata(entry.path(), format, &metadata),
            Err(e) => {
                warn!("Cannot stat {:?}: {}", entry.path(), e);
                None
            }
        }
    }

    fn with_metadata(path: &Path, format: ImageFormat, metadata: &std::fs::Metadata) -> Option<Self> {
        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(e) => {
                warn!("No modification time for {:?}: {}", path, e);
                return None;
            }
        };

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Some(Self {
            path: path.to_path_buf(),
            format,
            extension,
            size: metadata.len(),
            modified,
        })
    }
}

/// Lazily enumerate selected files under `roots`.
///
/// With `recursive` every descendant directory is visited; without it only
/// the direct children of each root. A root that is itself a file is yielded
/// if it matches. Entries are visited in file-name order. Workspace
/// directories left behind by an interrupted run are not entered.
pub fn scan<'a>(
    roots: &'a [PathBuf],
    recursive: bool,
    extensions: &'a ExtensionSet,
) -> impl Iterator<Item = FileCandidate> + 'a {
    roots
        .iter()
        .flat_map(move |root| scan_root(root, recursive, extensions))
}

fn scan_root<'a>(
    root: &Path,
    recursive: bool,
    extensions: &'a ExtensionSet,
) -> impl Iterator<Item = FileCandidate> + 'a {
    let mut walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker
        .into_iter()
        .filter_entry(|entry| !is_workspace_dir(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(move |entry| {
            let candidate = FileCandidate::from_entry(&entry, extensions);
            if candidate.is_none() {
                trace!("Not selected: {:?}", entry.path());
            }
            candidate
        })
}

fn is_workspace_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(WORKSPACE_PREFIX))
}
