use async_trait::async_trait;

use crate::domain::{AnnotatedRepository, DomainError};

/// Read access to the catalog of repositories and their LCSH annotations.
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// Every repository with at least one term assigned.
    async fn fetch_annotated(&self) -> Result<Vec<AnnotatedRepository>, DomainError>;

    /// Every repository whose term list contains `term_id` exactly.
    async fn fetch_by_term(&self, term_id: &str) -> Result<Vec<AnnotatedRepository>, DomainError>;
}
