use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ReportController, SearchController};

pub struct Router<'a> {
    report_controller: ReportController<'a>,
    search_controller: SearchController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            report_controller: ReportController::new(container),
            search_controller: SearchController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Report {
                list_repos,
                list_terms,
                stats,
            } => {
                self.report_controller
                    .report(list_repos, list_terms, stats)
                    .await
            }
            Commands::Find { term } => self.search_controller.search(term).await,
            Commands::Start { .. } => unreachable!("Start command is handled separately in main"),
        }
    }
}
