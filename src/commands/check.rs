use crate::areas::project::Project;
use crate::artifacts::diff::report::Report;
use crate::artifacts::suppression::SuppressionStore;
use colored::Colorize;

/// What a check run found, separate from how it gets presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub problems: usize,
    pub unresolved: usize,
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        self.unresolved == 0
    }
}

impl Project {
    /// Validates the whole version chain and prints every unresolved problem
    /// (and, with `--verbose`, the resolved ones too). A missing solved file
    /// degrades to "nothing accepted yet" with a warning; it never aborts.
    pub fn check(&self) -> anyhow::Result<CheckOutcome> {
        let mut reports = self.annotated_reports()?;

        let store = SuppressionStore::load(&self.solved_file())?;
        store.resolve(&mut reports);

        if !store.is_present() {
            writeln!(
                self.writer(),
                "{}",
                format!(
                    "warning: no solved file at {}, every problem counts as unresolved",
                    store.path().display()
                )
                .yellow()
            )?;
        }

        for report in &reports {
            self.print_report(report)?;
        }

        let outcome = CheckOutcome {
            problems: reports.iter().map(|report| report.problems.len()).sum(),
            unresolved: reports.iter().map(|report| report.unresolved().count()).sum(),
        };
        self.print_summary(reports.len(), &outcome)?;

        Ok(outcome)
    }

    fn print_report(&self, report: &Report) -> anyhow::Result<()> {
        let verbose = self.config().verbose;

        if report.is_resolved() && !verbose {
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!("Version {} -> {}:", report.from_version, report.to_version).bold()
        )?;

        if report.problems.is_empty() {
            writeln!(self.writer(), "  {}", "no problems".green())?;
            return Ok(());
        }

        for problem in &report.problems {
            if !problem.resolved || verbose {
                writeln!(self.writer(), "{}", problem.render())?;
            }
        }

        Ok(())
    }

    fn print_summary(&self, report_count: usize, outcome: &CheckOutcome) -> anyhow::Result<()> {
        if outcome.is_clean() {
            writeln!(
                self.writer(),
                "{}",
                format!(
                    "Checked {} migration(s): nothing blocks the version chain",
                    report_count
                )
                .green()
            )?;
        } else {
            writeln!(
                self.writer(),
                "{}",
                format!(
                    "Checked {} migration(s): {} of {} problem(s) unresolved",
                    report_count, outcome.unresolved, outcome.problems
                )
                .red()
            )?;
        }

        Ok(())
    }
}
