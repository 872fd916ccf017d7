use indexmap::IndexMap;
use serde::Serialize;

use super::AnnotatedRepository;

/// Statistics derived from a snapshot of annotated repositories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationSummary {
    pub total_count: usize,
    pub max_count: usize,
    /// Every repository whose term count equals `max_count`, in input order.
    pub max_holders: Vec<AnnotatedRepository>,
    /// Term id to number of repositories carrying it, in first-seen order.
    pub term_histogram: IndexMap<String, usize>,
}

impl AnnotationSummary {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Histogram entries by descending count; ties keep first-seen order.
    pub fn ranked_terms(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .term_histogram
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The terms used the most times, and that count.
    pub fn most_used_terms(&self) -> (Vec<&str>, usize) {
        let max = self.term_histogram.values().copied().max().unwrap_or(0);
        if max == 0 {
            return (Vec::new(), 0);
        }
        let terms = self
            .term_histogram
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(term, _)| term.as_str())
            .collect();
        (terms, max)
    }

    /// Distinct term ids in use, sorted by id.
    pub fn distinct_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.term_histogram.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    pub fn usage_of(&self, term_id: &str) -> usize {
        self.term_histogram.get(term_id).copied().unwrap_or(0)
    }
}
