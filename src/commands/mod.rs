//! User-facing commands
//!
//! One file per command, each implemented as an `impl Project` block:
//!
//! - `check`: run the full validation pipeline and report problems
//! - `accept`: record the currently unresolved fingerprints as reviewed

pub mod accept;
pub mod check;

use crate::areas::project::Project;
use crate::artifacts::diff::model_diff::ModelDiff;
use crate::artifacts::diff::report::Report;
use crate::artifacts::fingerprint;

impl Project {
    /// Discovery, loading, diffing, and fingerprinting; the shared front half
    /// of every command.
    pub(crate) fn annotated_reports(&self) -> anyhow::Result<Vec<Report>> {
        let sources = self.workspace().discover()?;
        let versions = self.loader().load_chain(&sources)?;

        let mut reports = ModelDiff::new(&versions).reports();
        fingerprint::annotate(&mut reports);

        Ok(reports)
    }
}
