use anyhow::Result;
use serde::Serialize;

use crate::application::RepositoryView;
use crate::cli::OutputFormat;

use super::super::Container;

#[derive(Serialize)]
struct SearchView<'t> {
    term: &'t str,
    count: usize,
    repositories: Vec<RepositoryView>,
}

pub struct SearchController<'a> {
    container: &'a Container,
}

impl<'a> SearchController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn search(&self, term: String) -> Result<String> {
        let records = self.container.search_use_case().execute(&term).await?;
        let reporter = self.container.reporter();

        match self.container.format() {
            OutputFormat::Text => Ok(reporter.report_search_results(&records).await?),
            OutputFormat::Json => {
                let view = SearchView {
                    term: &term,
                    count: records.len(),
                    repositories: reporter.repository_views(&records).await?,
                };
                Ok(serde_json::to_string_pretty(&view)?)
            }
        }
    }
}
