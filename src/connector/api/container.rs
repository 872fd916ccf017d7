use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{
    ListAnnotatedRepositoriesUseCase, Reporter, RepositoryStore, SearchByTermUseCase,
    VocabularyStore,
};
use crate::cli::OutputFormat;
use crate::connector::{DuckdbRepositoryStore, DuckdbVocabularyStore};

pub const REPOSITORY_DB_FILE: &str = "github.duckdb";
pub const VOCABULARY_DB_FILE: &str = "lcsh.duckdb";

pub struct ContainerConfig {
    pub data_dir: String,
    pub format: OutputFormat,
}

/// Owns the two store handles for the lifetime of one invocation and hands
/// them to use cases.
pub struct Container {
    repository_store: Arc<dyn RepositoryStore>,
    vocabulary_store: Arc<dyn VocabularyStore>,
    config: ContainerConfig,
}

impl Container {
    /// Opens both DuckDB stores under `data_dir` read-only.
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let data_dir = PathBuf::from(&config.data_dir);
        let repos_path = data_dir.join(REPOSITORY_DB_FILE);
        let lcsh_path = data_dir.join(VOCABULARY_DB_FILE);

        debug!("Using repository store at {:?}", repos_path);
        let repository_store = Arc::new(DuckdbRepositoryStore::open_read_only(&repos_path)?);

        debug!("Using LCSH store at {:?}", lcsh_path);
        let vocabulary_store = Arc::new(DuckdbVocabularyStore::open_read_only(&lcsh_path)?);

        Ok(Self::with_stores(repository_store, vocabulary_store, config))
    }

    pub fn with_stores(
        repository_store: Arc<dyn RepositoryStore>,
        vocabulary_store: Arc<dyn VocabularyStore>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            repository_store,
            vocabulary_store,
            config,
        }
    }

    pub fn list_annotated_use_case(&self) -> ListAnnotatedRepositoriesUseCase {
        ListAnnotatedRepositoriesUseCase::new(self.repository_store.clone())
    }

    pub fn search_use_case(&self) -> SearchByTermUseCase {
        SearchByTermUseCase::new(self.repository_store.clone())
    }

    /// A fresh reporter; its label cache lives as long as the reporter.
    pub fn reporter(&self) -> Reporter {
        Reporter::new(self.vocabulary_store.clone())
    }

    pub fn format(&self) -> OutputFormat {
        self.config.format
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }
}
