use crate::areas::project::Project;
use crate::artifacts::suppression::SuppressionStore;
use colored::Colorize;

impl Project {
    /// Records every currently unresolved fingerprint in the solved file,
    /// creating it if needed and skipping keys that are already there.
    pub fn accept(&self) -> anyhow::Result<usize> {
        let mut reports = self.annotated_reports()?;

        let mut store = SuppressionStore::load(&self.solved_file())?;
        store.resolve(&mut reports);

        let unresolved: Vec<&str> = reports
            .iter()
            .flat_map(|report| report.unresolved())
            .map(|problem| problem.fingerprint.as_str())
            .collect();
        let accepted = store.accept(unresolved)?;

        for key in &accepted {
            writeln!(self.writer(), "  {} {}", "accepted".green(), key)?;
        }

        if accepted.is_empty() {
            writeln!(self.writer(), "Nothing to accept, the chain is clean")?;
        } else {
            writeln!(
                self.writer(),
                "Recorded {} fingerprint(s) in {}",
                accepted.len(),
                store.path().display()
            )?;
        }

        Ok(accepted.len())
    }
}
