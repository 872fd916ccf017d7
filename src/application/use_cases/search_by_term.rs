use std::sync::Arc;

use tracing::info;

use crate::application::RepositoryStore;
use crate::domain::{validate_term_id, AnnotatedRepository, DomainError};

pub struct SearchByTermUseCase {
    repository_store: Arc<dyn RepositoryStore>,
}

impl SearchByTermUseCase {
    pub fn new(repository_store: Arc<dyn RepositoryStore>) -> Self {
        Self { repository_store }
    }

    /// Repositories annotated with `term_id`. The term need not exist in the
    /// vocabulary; an unknown term simply matches nothing.
    pub async fn execute(&self, term_id: &str) -> Result<Vec<AnnotatedRepository>, DomainError> {
        validate_term_id(term_id)?;

        info!("Searching for repos annotated with {} ...", term_id);
        self.repository_store.fetch_by_term(term_id).await
    }
}
