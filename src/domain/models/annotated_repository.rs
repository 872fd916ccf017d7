use serde::{Deserialize, Serialize};

/// A cataloged repository and the LCSH term ids currently assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedRepository {
    id: i64,
    owner: String,
    name: String,
    terms: Vec<String>,
}

impl AnnotatedRepository {
    pub fn new(id: i64, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
            name: name.into(),
            terms: Vec::new(),
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(id: i64, owner: String, name: String, terms: Vec<String>) -> Self {
        Self {
            id,
            owner,
            name,
            terms,
        }
    }

    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn is_annotated(&self) -> bool {
        !self.terms.is_empty()
    }

    pub fn has_term(&self, term_id: &str) -> bool {
        self.terms.iter().any(|t| t == term_id)
    }

    /// Short identifier used wherever a repository is named in a report.
    pub fn display_name(&self) -> String {
        format!("{} ({}/{})", self.id, self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_repository_has_no_terms() {
        let repo = AnnotatedRepository::new(42, "casics", "annotator");

        assert_eq!(repo.id(), 42);
        assert_eq!(repo.term_count(), 0);
        assert!(!repo.is_annotated());
    }

    #[test]
    fn test_has_term_matches_exactly() {
        let repo = AnnotatedRepository::new(1, "o", "n").with_terms(["sh85029552", "sh2008"]);

        assert!(repo.has_term("sh2008"));
        assert!(!repo.has_term("sh200"));
        assert_eq!(repo.term_count(), 2);
    }

    #[test]
    fn test_display_name() {
        let repo = AnnotatedRepository::new(973792, "mhucka", "casics");
        assert_eq!(repo.display_name(), "973792 (mhucka/casics)");
    }
}
