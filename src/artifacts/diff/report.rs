use crate::artifacts::diff::problem::Problem;
use derive_new::new;

/// The complete problem set for one adjacent version pair.
///
/// Problems are stored in the old version's iteration order: entities first,
/// then their fields, then attribute keys in key order.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Report {
    pub from_version: u32,
    pub to_version: u32,
    pub problems: Vec<Problem>,
}

impl Report {
    pub fn is_resolved(&self) -> bool {
        self.problems.iter().all(|problem| problem.resolved)
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter().filter(|problem| !problem.resolved)
    }
}
