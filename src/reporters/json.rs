//! JSON reporter
//!
//! Outputs the full analysis as pretty-printed JSON, including the derived
//! interpretation when scores exist. Useful for machine consumption, piping
//! to jq, or further processing.

use crate::interpret::Interpretation;
use crate::models::AnalysisReport;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    /// Derived on demand from the scores; null when scores are null
    interpretation: Option<Interpretation>,
}

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    let wrapper = JsonReport {
        report,
        interpretation: report.scores.as_ref().map(Interpretation::from_scores),
    };
    Ok(serde_json::to_string_pretty(&wrapper)?)
}

/// Render report as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(report: &AnalysisReport) -> Result<String> {
    let wrapper = JsonReport {
        report,
        interpretation: report.scores.as_ref().map(Interpretation::from_scores),
    };
    Ok(serde_json::to_string(&wrapper)?)
}
