use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::application::VocabularyStore;
use crate::domain::{DomainError, VocabularyTerm};

/// Resolves term ids to labels, remembering each answer for the lifetime of
/// this value.
pub struct VocabularyLookup {
    vocabulary_store: Arc<dyn VocabularyStore>,
    labels: Mutex<HashMap<String, String>>,
}

impl VocabularyLookup {
    pub fn new(vocabulary_store: Arc<dyn VocabularyStore>) -> Self {
        Self {
            vocabulary_store,
            labels: Mutex::new(HashMap::new()),
        }
    }

    pub async fn label_of(&self, term_id: &str) -> Result<String, DomainError> {
        if term_id.is_empty() {
            return Err(DomainError::invalid_input("term id must not be empty"));
        }

        let mut labels = self.labels.lock().await;
        if let Some(label) = labels.get(term_id) {
            return Ok(label.clone());
        }

        let label = self
            .vocabulary_store
            .find_label(term_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("LCSH term {}", term_id)))?;
        debug!("Resolved {} -> {}", term_id, label);

        labels.insert(term_id.to_string(), label.clone());
        Ok(label)
    }

    pub async fn term(&self, term_id: &str) -> Result<VocabularyTerm, DomainError> {
        self.vocabulary_store
            .find_term(term_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("LCSH term {}", term_id)))
    }
}
