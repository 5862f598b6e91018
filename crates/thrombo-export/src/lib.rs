//! thrombo-export
//!
//! Turns an [`Assessment`](thrombo_scoring::Assessment) into the report
//! tables, renders them as HTML or DOCX, and appends the spreadsheet log.
//! All configuration lives in [`config::ReportConfig`].

pub mod config;
pub mod docx;
pub mod error;
pub mod render;
pub mod report;
pub mod spreadsheet;
pub mod styles;

pub use config::ReportConfig;
pub use error::ExportError;
pub use report::{Examination, Report, ReportHeader, ReportTable, build_report};
