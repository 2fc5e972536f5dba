use super::{FileAction, Outcome};
use crate::config::ActionKind;
use crate::scanner::FileCandidate;

/// Adds up on-disk sizes. Never runs an external tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeAction;

impl FileAction for SizeAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Size
    }

    fn process(&self, candidate: &FileCandidate) -> smally_tools::Result<Outcome> {
        Ok(Outcome::Counted {
            size: candidate.size,
        })
    }
}
