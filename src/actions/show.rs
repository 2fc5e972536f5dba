use super::{FileAction, Outcome};
use crate::config::ActionKind;
use crate::scanner::FileCandidate;
use smally_tools::Prober;

/// Probes each file and reports format, dimensions and size. Read-only.
#[derive(Debug, Clone)]
pub struct ShowAction {
    prober: Prober,
}

impl ShowAction {
    pub fn new(prober: Prober) -> Self {
        Self { prober }
    }
}

impl FileAction for ShowAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Show
    }

    fn process(&self, candidate: &FileCandidate) -> smally_tools::Result<Outcome> {
        let info = self.prober.probe(&candidate.path)?;
        Ok(Outcome::Shown {
            info,
            size: candidate.size,
        })
    }
}
