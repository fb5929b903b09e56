//! imp-export
//!
//! Report assembly and chart data for scored IMP evaluations. Reports are
//! rendered from Tera templates into Markdown-style text.

pub mod chart;
pub mod error;
pub mod render;
pub mod report;
