//! Accepted-problem store
//!
//! Maintainers record fingerprint keys they have reviewed in a plain text
//! file, one key per line. Problems whose fingerprint appears there verbatim
//! are marked resolved; everything else stays unresolved. A missing file is
//! not an error, it only means nothing has been accepted yet.

use crate::artifacts::diff::report::Report;
use anyhow::Context;
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SuppressionStore {
    path: PathBuf,
    keys: HashSet<String>,
    present: bool,
}

impl SuppressionStore {
    /// Reads the store file in full. Absence degrades to an empty key set;
    /// the caller decides how to surface that (the check command prints a
    /// warning, it never aborts).
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(SuppressionStore {
                path: path.to_path_buf(),
                keys: HashSet::new(),
                present: false,
            });
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read solved file {}", path.display()))?;
        let keys = contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(SuppressionStore {
            path: path.to_path_buf(),
            keys,
            present: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Sets every problem's resolved flag by exact key membership.
    pub fn resolve(&self, reports: &mut [Report]) {
        for report in reports {
            for problem in &mut report.problems {
                problem.resolved = self.keys.contains(&problem.fingerprint);
            }
        }
    }

    /// Appends the given keys to the store file, skipping ones already
    /// recorded, and returns the keys actually written in input order.
    pub fn accept<'k>(
        &mut self,
        keys: impl IntoIterator<Item = &'k str>,
    ) -> anyhow::Result<Vec<String>> {
        let mut accepted = Vec::new();

        for key in keys {
            if self.keys.insert(key.to_string()) {
                accepted.push(key.to_string());
            }
        }

        if !accepted.is_empty() {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create solved file directory {}", parent.display())
                })?;
            }

            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open solved file {}", self.path.display()))?;

            for key in &accepted {
                writeln!(file, "{}", key)?;
            }

            self.present = true;
        }

        Ok(accepted)
    }
}
