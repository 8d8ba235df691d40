use derive_new::new;
use std::path::{Path, PathBuf};

/// File extension of a model source description.
pub const MODEL_EXTENSION: &str = "model";

/// One discovered version: its number and the model file that describes it.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct VersionSource {
    pub number: u32,
    pub path: PathBuf,
}

/// The on-disk layout of a versioned model: one numbered subdirectory per
/// version, each holding `<model>.model`.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    model_name: String,
}

impl Workspace {
    pub fn new(path: Box<Path>, model_name: impl Into<String>) -> Self {
        Workspace {
            path,
            model_name: model_name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn model_file(&self, number: u32) -> PathBuf {
        self.path
            .join(number.to_string())
            .join(format!("{}.{}", self.model_name, MODEL_EXTENSION))
    }

    /// Probes version directories `1`, `2`, ... and stops at the first number
    /// whose model file does not exist. Zero discovered versions is fatal.
    pub fn discover(&self) -> anyhow::Result<Vec<VersionSource>> {
        let mut sources = Vec::new();

        for number in 1u32.. {
            let path = self.model_file(number);

            if !path.exists() {
                break;
            }

            sources.push(VersionSource::new(number, path));
        }

        if sources.is_empty() {
            anyhow::bail!(
                "No model versions found under {} (expected {})",
                self.path.display(),
                self.model_file(1).display()
            );
        }

        Ok(sources)
    }
}
