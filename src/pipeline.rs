//! End-to-end analysis pipeline
//!
//! Archive bytes in, [`AnalysisReport`] out: collect `.lang` entries, pick
//! the largest, extract its prose, score it. Each stage is a pure function;
//! the report threads all state explicitly, so concurrent runs on different
//! archives need no coordination.

use crate::archive;
use crate::error::ReadcraftError;
use crate::extract::{extract_readable_text_with, ExtractOptions};
use crate::models::AnalysisReport;
use crate::readability;
use std::path::Path;
use tracing::{debug, info};

/// Analyze the archive at `path` and produce a full report.
///
/// `scores` in the result is `None` when the extracted text was unscoreable
/// (zero sentences or zero words); deciding whether that is fatal is the
/// caller's call — the CLI treats it as a terminal display error.
pub fn analyze_archive(
    path: &Path,
    opts: &ExtractOptions,
) -> Result<AnalysisReport, ReadcraftError> {
    let lang_files = archive::read_language_files(path)?;
    info!(count = lang_files.len(), "collected language files");

    let largest = archive::largest(&lang_files).ok_or(ReadcraftError::NoLanguageFiles)?;
    debug!(path = %largest.path, size = largest.size, "selected largest language file");

    let extracted_text = extract_readable_text_with(&largest.content, opts);
    debug!(chars = extracted_text.chars().count(), "extracted readable text");

    let scores = readability::score(&extracted_text);
    if scores.is_none() {
        debug!("extracted text has no sentences or words; scores unavailable");
    }

    Ok(AnalysisReport {
        archive: path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string(),
        total_lang_files: lang_files.len(),
        largest_path: largest.path.clone(),
        largest_size: largest.size,
        extracted_text,
        scores,
    })
}
