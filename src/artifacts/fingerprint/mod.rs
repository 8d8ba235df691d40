//! Stable problem identities
//!
//! Maps every problem to a deterministic string key, independent of message
//! wording and run order. The key is what maintainers record in the solved
//! file to accept a problem, so its shape is a compatibility contract.

use crate::artifacts::diff::problem::ProblemKind;
use crate::artifacts::diff::report::Report;

const KEY_PREFIX: &str = "solved";

/// Derives the fingerprint key for one problem in one report.
///
/// The `changed` key omits the attribute name, so every attribute change on
/// one field in one target version shares a single fingerprint. Existing
/// solved files depend on this shape.
pub fn key(to_version: u32, kind: &ProblemKind) -> String {
    match kind {
        ProblemKind::MissingEntity { entity } => {
            format!("{}.{}.entity.{}.missing", KEY_PREFIX, to_version, entity)
        }
        ProblemKind::MissingField { entity, field } => {
            format!(
                "{}.{}.field.{}.{}.missing",
                KEY_PREFIX, to_version, entity, field
            )
        }
        ProblemKind::ChangedAttribute { entity, field, .. } => {
            format!(
                "{}.{}.field.{}.{}.changed",
                KEY_PREFIX, to_version, entity, field
            )
        }
    }
}

/// Writes each problem's fingerprint in place, once per run.
pub fn annotate(reports: &mut [Report]) {
    for report in reports {
        let to_version = report.to_version;

        for problem in &mut report.problems {
            problem.fingerprint = key(to_version, &problem.kind);
        }
    }
}
