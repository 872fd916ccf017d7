use anyhow::Result;
use serde::Serialize;

use crate::application::{RepositoryView, StatsView, TermView};
use crate::cli::OutputFormat;
use crate::domain::summarize;

use super::super::Container;

#[derive(Serialize)]
struct ReportView {
    total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<StatsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repositories: Option<Vec<RepositoryView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terms: Option<Vec<TermView>>,
}

/// Totals, statistics, repository list and term list over every annotated
/// repository, fetched once.
pub struct ReportController<'a> {
    container: &'a Container,
}

impl<'a> ReportController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn report(&self, list_repos: bool, list_terms: bool, stats: bool) -> Result<String> {
        let records = self.container.list_annotated_use_case().execute().await?;
        let summary = summarize(&records);
        let reporter = self.container.reporter();

        match self.container.format() {
            OutputFormat::Text => {
                let mut sections = vec![reporter.report_totals(&summary)];
                if stats {
                    sections.push(reporter.report_max(&summary));
                    sections.push(reporter.report_most_used(&summary));
                    sections.push(reporter.report_histogram(&summary).await?);
                }
                if list_repos && !records.is_empty() {
                    sections.push(reporter.report_repositories(&records).await?);
                }
                if list_terms {
                    sections.push(reporter.report_terms(&summary).await?);
                }
                Ok(sections.join("\n"))
            }
            OutputFormat::Json => {
                let view = ReportView {
                    total_count: summary.total_count,
                    stats: if stats {
                        Some(reporter.stats_view(&summary).await?)
                    } else {
                        None
                    },
                    repositories: if list_repos {
                        Some(reporter.repository_views(&records).await?)
                    } else {
                        None
                    },
                    terms: if list_terms {
                        Some(reporter.term_views(&summary).await?)
                    } else {
                        None
                    },
                };
                Ok(serde_json::to_string_pretty(&view)?)
            }
        }
    }
}
