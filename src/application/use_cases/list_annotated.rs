use std::sync::Arc;

use tracing::info;

use crate::application::RepositoryStore;
use crate::domain::{AnnotatedRepository, DomainError};

pub struct ListAnnotatedRepositoriesUseCase {
    repository_store: Arc<dyn RepositoryStore>,
}

impl ListAnnotatedRepositoriesUseCase {
    pub fn new(repository_store: Arc<dyn RepositoryStore>) -> Self {
        Self { repository_store }
    }

    pub async fn execute(&self) -> Result<Vec<AnnotatedRepository>, DomainError> {
        info!("Gathering list of annotated repositories ...");
        let repos = self.repository_store.fetch_annotated().await?;
        info!("Done. {} annotated repositories", repos.len());
        Ok(repos)
    }
}
