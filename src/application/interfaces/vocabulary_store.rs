use async_trait::async_trait;

use crate::domain::{DomainError, VocabularyTerm};

/// Point lookups against the LCSH vocabulary.
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    async fn find_label(&self, term_id: &str) -> Result<Option<String>, DomainError>;

    async fn find_term(&self, term_id: &str) -> Result<Option<VocabularyTerm>, DomainError>;
}
