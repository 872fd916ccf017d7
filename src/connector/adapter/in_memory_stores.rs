use std::collections::HashMap;

use async_trait::async_trait;

use crate::application::{RepositoryStore, VocabularyStore};
use crate::domain::{AnnotatedRepository, DomainError, VocabularyTerm};

/// Fixed repository snapshot served from memory, in insertion order.
pub struct InMemoryRepositoryStore {
    repositories: Vec<AnnotatedRepository>,
}

impl InMemoryRepositoryStore {
    pub fn new(repositories: Vec<AnnotatedRepository>) -> Self {
        Self { repositories }
    }
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn fetch_annotated(&self) -> Result<Vec<AnnotatedRepository>, DomainError> {
        Ok(self
            .repositories
            .iter()
            .filter(|r| r.is_annotated())
            .cloned()
            .collect())
    }

    async fn fetch_by_term(&self, term_id: &str) -> Result<Vec<AnnotatedRepository>, DomainError> {
        Ok(self
            .repositories
            .iter()
            .filter(|r| r.has_term(term_id))
            .cloned()
            .collect())
    }
}

pub struct InMemoryVocabularyStore {
    terms: HashMap<String, VocabularyTerm>,
}

impl InMemoryVocabularyStore {
    pub fn new(terms: Vec<VocabularyTerm>) -> Self {
        Self {
            terms: terms
                .into_iter()
                .map(|t| (t.id().to_string(), t))
                .collect(),
        }
    }
}

#[async_trait]
impl VocabularyStore for InMemoryVocabularyStore {
    async fn find_label(&self, term_id: &str) -> Result<Option<String>, DomainError> {
        Ok(self.terms.get(term_id).map(|t| t.label().to_string()))
    }

    async fn find_term(&self, term_id: &str) -> Result<Option<VocabularyTerm>, DomainError> {
        Ok(self.terms.get(term_id).cloned())
    }
}
