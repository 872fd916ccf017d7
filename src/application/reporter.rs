//! Human-readable and JSON renderings of annotation reports.
//!
//! Every term shown in a report is resolved through [`VocabularyLookup`]. A
//! term missing from the vocabulary aborts the whole report with
//! [`DomainError::NotFound`]; nothing is silently dropped.

use std::sync::Arc;

use serde::Serialize;

use crate::application::{VocabularyLookup, VocabularyStore};
use crate::domain::{AnnotatedRepository, AnnotationSummary, DomainError};

const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermView {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryView {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub terms: Vec<TermView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub total_count: usize,
    pub max_count: usize,
    pub max_holders: Vec<String>,
    pub most_used_count: usize,
    pub most_used_terms: Vec<String>,
    pub term_usage: Vec<TermView>,
}

pub struct Reporter {
    lookup: VocabularyLookup,
}

impl Reporter {
    pub fn new(vocabulary_store: Arc<dyn VocabularyStore>) -> Self {
        Self {
            lookup: VocabularyLookup::new(vocabulary_store),
        }
    }

    pub fn summary_of(&self, record: &AnnotatedRepository) -> String {
        format!("{}: {} terms", record.display_name(), record.term_count())
    }

    /// One `<prefix><term>: <label>` line per term, newline separated.
    pub async fn explain_terms(
        &self,
        record: &AnnotatedRepository,
        prefix: &str,
    ) -> Result<String, DomainError> {
        let mut lines = Vec::with_capacity(record.term_count());
        for term in record.terms() {
            let label = self.lookup.label_of(term).await?;
            lines.push(format!("{}{}: {}", prefix, term, label));
        }
        Ok(lines.join("\n"))
    }

    pub fn report_totals(&self, summary: &AnnotationSummary) -> String {
        format!("Total annotated repositories found: {}", summary.total_count)
    }

    pub fn report_max(&self, summary: &AnnotationSummary) -> String {
        let holders: Vec<String> = summary
            .max_holders
            .iter()
            .map(AnnotatedRepository::display_name)
            .collect();
        format!(
            "Most number of terms on any repo: {}\n└─ Repo(s) in question (total: {}): {}",
            summary.max_count,
            holders.len(),
            holders.join(", ")
        )
    }

    pub fn report_most_used(&self, summary: &AnnotationSummary) -> String {
        let (terms, count) = summary.most_used_terms();
        format!(
            "Most number of times any term is used: {}\n└─ Term(s) used that number of times: {}",
            count,
            terms.join(", ")
        )
    }

    /// Term usage sorted by descending count.
    pub async fn report_histogram(&self, summary: &AnnotationSummary) -> Result<String, DomainError> {
        let mut output = String::from("Term usage statistics:");
        for (term, count) in summary.ranked_terms() {
            let label = self.lookup.label_of(term).await?;
            output.push_str(&format!("\n  {:>3}: {} = {}", count, term, label));
        }
        Ok(output)
    }

    /// Distinct terms in use, sorted by id.
    pub async fn report_terms(&self, summary: &AnnotationSummary) -> Result<String, DomainError> {
        let mut output = format!("LCSH terms in use: {}", summary.term_histogram.len());
        for term in summary.distinct_terms() {
            let label = self.lookup.label_of(term).await?;
            output.push_str(&format!(
                "\n  {}: {} ({} repos)",
                term,
                label,
                summary.usage_of(term)
            ));
        }
        Ok(output)
    }

    pub async fn report_repositories(
        &self,
        records: &[AnnotatedRepository],
    ) -> Result<String, DomainError> {
        let rule = "-".repeat(RULE_WIDTH);
        let mut blocks = Vec::with_capacity(records.len());
        for record in records {
            let mut block = format!("{}\n{}", rule, self.summary_of(record));
            let explained = self.explain_terms(record, "    ").await?;
            if !explained.is_empty() {
                block.push('\n');
                block.push_str(&explained);
            }
            blocks.push(block);
        }
        Ok(blocks.join("\n"))
    }

    pub async fn report_search_results(
        &self,
        records: &[AnnotatedRepository],
    ) -> Result<String, DomainError> {
        let mut output = format!("Found {} repos:", records.len());
        for record in records {
            output.push_str(&format!("\n   {}", self.summary_of(record)));
            let explained = self.explain_terms(record, "      ").await?;
            if !explained.is_empty() {
                output.push('\n');
                output.push_str(&explained);
            }
        }
        Ok(output)
    }

    pub async fn repository_view(
        &self,
        record: &AnnotatedRepository,
    ) -> Result<RepositoryView, DomainError> {
        let mut terms = Vec::with_capacity(record.term_count());
        for term in record.terms() {
            terms.push(TermView {
                id: term.clone(),
                label: self.lookup.label_of(term).await?,
                count: None,
            });
        }
        Ok(RepositoryView {
            id: record.id(),
            owner: record.owner().to_string(),
            name: record.name().to_string(),
            terms,
        })
    }

    pub async fn repository_views(
        &self,
        records: &[AnnotatedRepository],
    ) -> Result<Vec<RepositoryView>, DomainError> {
        let mut views = Vec::with_capacity(records.len());
        for record in records {
            views.push(self.repository_view(record).await?);
        }
        Ok(views)
    }

    pub async fn term_views(&self, summary: &AnnotationSummary) -> Result<Vec<TermView>, DomainError> {
        let mut views = Vec::with_capacity(summary.term_histogram.len());
        for term in summary.distinct_terms() {
            views.push(TermView {
                id: term.to_string(),
                label: self.lookup.label_of(term).await?,
                count: Some(summary.usage_of(term)),
            });
        }
        Ok(views)
    }

    pub async fn stats_view(&self, summary: &AnnotationSummary) -> Result<StatsView, DomainError> {
        let mut term_usage = Vec::with_capacity(summary.term_histogram.len());
        for (term, count) in summary.ranked_terms() {
            term_usage.push(TermView {
                id: term.to_string(),
                label: self.lookup.label_of(term).await?,
                count: Some(count),
            });
        }
        let (most_used, most_used_count) = summary.most_used_terms();

        Ok(StatsView {
            total_count: summary.total_count,
            max_count: summary.max_count,
            max_holders: summary
                .max_holders
                .iter()
                .map(AnnotatedRepository::display_name)
                .collect(),
            most_used_count,
            most_used_terms: most_used.into_iter().map(str::to_string).collect(),
            term_usage,
        })
    }
}
