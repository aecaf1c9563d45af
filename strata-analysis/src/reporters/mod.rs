//! Reporters — output formats for pipeline reports.
//!
//! 3 formats: console, JSON, GitHub workflow annotations.

pub mod console;
pub mod github;
pub mod json;

use crate::pipeline::PipelineReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &PipelineReport) -> String;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::new(use_color))),
        "json" => Some(Box::new(json::JsonReporter)),
        "github" => Some(Box::new(github::GitHubReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json", "github"]
}
