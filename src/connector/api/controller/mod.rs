pub mod report_controller;
pub mod search_controller;

pub use report_controller::ReportController;
pub use search_controller::SearchController;
