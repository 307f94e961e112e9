mod reports;
mod seed;

pub use reports::ReportStore;
pub use seed::seed_reports;
