use crate::areas::loader::ModelLoader;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_NAME: &str = "model";
pub const DEFAULT_SOLVED_FILE: &str = "solved.txt";

/// Run-scoped configuration, passed in explicitly rather than read from
/// ambient state.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub directory: PathBuf,
    pub model_name: String,
    pub solved_file: Option<PathBuf>,
    pub verbose: bool,
}

impl ProjectConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        ProjectConfig {
            directory: directory.into(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            solved_file: None,
            verbose: false,
        }
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_solved_file(mut self, solved_file: impl Into<PathBuf>) -> Self {
        self.solved_file = Some(solved_file.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// High-level coordination of one checker run.
///
/// Owns the collaborators (workspace, loader) and the output writer; the
/// user-facing commands are implemented on this type, one per file under
/// `commands/`.
pub struct Project {
    config: ProjectConfig,
    workspace: Workspace,
    loader: ModelLoader,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Project {
    pub fn new(config: ProjectConfig, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let workspace = Workspace::new(
            config.directory.clone().into_boxed_path(),
            config.model_name.clone(),
        );
        let loader = ModelLoader::new()?;

        Ok(Project {
            config,
            workspace,
            loader,
            writer: RefCell::new(writer),
        })
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn loader(&self) -> &ModelLoader {
        &self.loader
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// The solved file path: explicit override or `<directory>/solved.txt`.
    pub fn solved_file(&self) -> PathBuf {
        match &self.config.solved_file {
            Some(path) => path.clone(),
            None => self.config.directory.join(DEFAULT_SOLVED_FILE),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.config.directory
    }
}
