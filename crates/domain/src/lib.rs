pub mod config;
pub mod error;
pub mod format;
pub mod report;

pub use error::{Error, Result};
pub use report::{CreateReport, Report};
