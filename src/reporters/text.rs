//! Text (terminal) reporter with colors and formatting

use crate::interpret::{Difficulty, Interpretation};
use crate::models::AnalysisReport;
use anyhow::Result;

/// Difficulty colors (ANSI escape codes)
fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::VeryEasy => "\x1b[32m",        // Green
        Difficulty::Easy => "\x1b[92m",            // Light green
        Difficulty::FairlyEasy => "\x1b[92m",      // Light green
        Difficulty::Standard => "\x1b[33m",        // Yellow
        Difficulty::FairlyDifficult => "\x1b[33m", // Yellow
        Difficulty::Difficult => "\x1b[91m",       // Light red
        Difficulty::VeryDifficult => "\x1b[31m",   // Red
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// How much extracted text to preview before truncating
const PREVIEW_CHARS: usize = 300;

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Readcraft Analysis{RESET}  {DIM}{}{RESET}\n", report.archive));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Language files: {}  Largest: {} ({} chars)\n\n",
        report.total_lang_files, report.largest_path, report.largest_size
    ));

    let Some(scores) = &report.scores else {
        out.push_str(&format!(
            "\x1b[31mCould not analyze the text content: no sentences or words after extraction.{RESET}\n"
        ));
        return Ok(out);
    };
    let interp = Interpretation::from_scores(scores);
    let diff_c = difficulty_color(interp.difficulty);

    // Statistics
    let stats = &scores.stats;
    out.push_str(&format!("{BOLD}STATISTICS{RESET}\n"));
    out.push_str(&format!(
        "  Sentences: {}  Words: {}  Syllables: {}  Complex words: {}\n",
        stats.sentences, stats.words, stats.syllables, stats.complex_words
    ));
    out.push_str(&format!(
        "  Words/sentence: {:.1}  Syllables/word: {:.2}  Chars/word: {:.1}\n\n",
        stats.avg_words_per_sentence, stats.avg_syllables_per_word, stats.avg_chars_per_word
    ));

    // Scores
    out.push_str(&format!("{BOLD}READABILITY SCORES{RESET}\n"));
    out.push_str(&format!(
        "  Flesch Reading Ease:    {diff_c}{:>6.1}{RESET}  ({})\n",
        scores.flesch_reading_ease, interp.difficulty
    ));
    out.push_str(&score_row("Flesch-Kincaid Grade", scores.flesch_kincaid_grade));
    out.push_str(&score_row("Gunning Fog Index", scores.gunning_fog));
    out.push_str(&score_row("SMOG Index", scores.smog_index));
    out.push_str(&score_row("Coleman-Liau Index", scores.coleman_liau));
    out.push_str(&score_row("Automated Readability", scores.automated_readability));
    out.push_str(&score_row("Linsear Write", scores.linsear_write));
    out.push('\n');

    // Interpretation
    out.push_str(&format!("{BOLD}READING LEVEL{RESET}\n"));
    out.push_str(&format!(
        "  Difficulty: {diff_c}{BOLD}{}{RESET}  Average grade: {:.1}  (~{} years old)\n",
        interp.difficulty, interp.avg_grade_level, interp.approximate_age
    ));
    out.push_str(&format!("  This content is {}.\n", interp.audience));
    out.push_str(&format!(
        "  Best suited for ages {}-{} (grades {}-{}), {}.\n",
        interp.age_range.0,
        interp.age_range.1,
        interp.grade_range.0,
        interp.grade_range.1,
        interp.educational_stage
    ));
    out.push_str(&format!("  {DIM}{}{RESET}\n\n", interp.educational_context));

    // Extracted text preview
    out.push_str(&format!("{BOLD}EXTRACTED TEXT{RESET}\n"));
    let preview: String = report.extracted_text.chars().take(PREVIEW_CHARS).collect();
    out.push_str(&format!("  {DIM}{preview}"));
    if report.extracted_text.chars().count() > PREVIEW_CHARS {
        out.push_str("... (truncated)");
    }
    out.push_str(&format!("{RESET}\n"));

    Ok(out)
}

fn score_row(name: &str, value: f64) -> String {
    format!("  {:<22}  {:>6.1}\n", format!("{name}:"), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_report, unscoreable_report};

    #[test]
    fn test_render_includes_scores_and_interpretation() {
        let out = render(&test_report()).expect("render");
        assert!(out.contains("Readcraft Analysis"));
        assert!(out.contains("Flesch Reading Ease"));
        assert!(out.contains("Linsear Write"));
        assert!(out.contains("Best suited for ages"));
    }

    #[test]
    fn test_render_without_scores_reports_error_line() {
        let out = render(&unscoreable_report()).expect("render");
        assert!(out.contains("Could not analyze the text content"));
        assert!(!out.contains("READABILITY SCORES"));
    }

    #[test]
    fn test_long_text_is_truncated() {
        let mut report = test_report();
        report.extracted_text = "word ".repeat(200);
        let out = render(&report).expect("render");
        assert!(out.contains("... (truncated)"));
    }
}
