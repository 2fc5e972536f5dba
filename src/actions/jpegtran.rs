use super::{FileAction, Outcome};
use crate::config::ActionKind;
use crate::scanner::FileCandidate;
use smally_common::ImageFormat;
use smally_tools::{Transcoded, Transcoder};
use std::fs;

/// Lossless in-place JPEG recompression.
///
/// With `keep_mtime` every rewritten file keeps its original modification
/// time. It is stamped on the replacement before the swap, so read-only
/// photos keep it too. Files that were not rewritten are never touched.
#[derive(Debug, Clone)]
pub struct JpegtranAction {
    transcoder: Transcoder,
    keep_mtime: bool,
}

impl JpegtranAction {
    pub fn new(transcoder: Transcoder, keep_mtime: bool) -> Self {
        Self {
            transcoder,
            keep_mtime,
        }
    }
}

impl FileAction for JpegtranAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Jpegtran
    }

    fn process(&self, candidate: &FileCandidate) -> smally_tools::Result<Outcome> {
        if candidate.format != ImageFormat::Jpeg {
            return Ok(Outcome::Skipped {
                reason: "not a JPEG",
            });
        }

        let path = &candidate.path;
        let original_mtime = if self.keep_mtime {
            Some(fs::metadata(path)?.modified()?)
        } else {
            None
        };

        match self.transcoder.transcode(path, original_mtime)? {
            Transcoded::Unchanged { original_size } => Ok(Outcome::Unchanged {
                size: original_size,
            }),
            Transcoded::Replaced { original_size, .. } => {
                let new_size = fs::metadata(path)?.len();
                Ok(Outcome::Replaced {
                    original_size,
                    new_size,
                })
            }
        }
    }
}
