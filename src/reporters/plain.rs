//! Plain-text report
//!
//! The structured, sectioned report meant for saving to a file: scores,
//! summary, statistics, recommendations, and the full extracted text.

use crate::interpret::Interpretation;
use crate::models::AnalysisReport;
use anyhow::Result;
use chrono::Local;

const RULE: &str = "==================================================";

/// Render the full analysis report as plain text
pub fn render(report: &AnalysisReport) -> Result<String> {
    let now = Local::now();
    let mut out = String::new();

    out.push_str("MINECRAFT EDUCATION LANGUAGE ANALYSIS REPORT\n");
    out.push_str(&format!("Generated: {}\n\n", now.format("%Y-%m-%d %H:%M:%S")));

    section(&mut out, "SOURCE INFORMATION");
    out.push_str(&format!("Archive:                   {}\n", report.archive));
    out.push_str(&format!("File Path:                 {}\n", report.largest_path));
    out.push_str(&format!("File Size:                 {} characters\n", report.largest_size));
    out.push_str(&format!("Language Files Found:      {}\n", report.total_lang_files));

    let Some(scores) = &report.scores else {
        section(&mut out, "ANALYSIS");
        out.push_str("Could not analyze the text content: no sentences or words after extraction.\n");
        out.push('\n');
        out.push_str(RULE);
        out.push_str("\nEND OF REPORT\n");
        out.push_str(RULE);
        out.push('\n');
        return Ok(out);
    };
    let interp = Interpretation::from_scores(scores);

    section(&mut out, "READABILITY SCORES");
    out.push_str(&format!(
        "Flesch Reading Ease:       {:.1} ({})\n",
        scores.flesch_reading_ease, interp.difficulty
    ));
    out.push_str(&format!("Flesch-Kincaid Grade:      {:.1}\n", scores.flesch_kincaid_grade));
    out.push_str(&format!("Gunning Fog Index:         {:.1}\n", scores.gunning_fog));
    out.push_str(&format!("SMOG Index:                {:.1}\n", scores.smog_index));
    out.push_str(&format!("Coleman-Liau Index:        {:.1}\n", scores.coleman_liau));
    out.push_str(&format!("Automated Readability:     {:.1}\n", scores.automated_readability));
    out.push_str(&format!("Linsear Write:             {:.1}\n", scores.linsear_write));

    section(&mut out, "SUMMARY ANALYSIS");
    out.push_str(&format!("Average Grade Level:       {:.1}\n", interp.avg_grade_level));
    out.push_str(&format!("Recommended Age:           {} years old\n", interp.approximate_age));
    out.push_str(&format!("Difficulty Level:          {}\n", interp.difficulty));
    out.push_str(&format!("Educational Stage:         {}\n", interp.educational_stage));
    out.push_str(&format!(
        "Age Range:                 {}-{}\n",
        interp.age_range.0, interp.age_range.1
    ));
    out.push_str(&format!(
        "Grade Range:               {}-{}\n",
        interp.grade_range.0, interp.grade_range.1
    ));

    let stats = &scores.stats;
    section(&mut out, "TEXT STATISTICS");
    out.push_str(&format!("Total Sentences:           {}\n", stats.sentences));
    out.push_str(&format!("Total Words:               {}\n", stats.words));
    out.push_str(&format!("Total Characters:          {}\n", stats.characters));
    out.push_str(&format!("Total Syllables:           {}\n", stats.syllables));
    out.push_str(&format!("Complex Words (3+ syllables): {}\n", stats.complex_words));
    out.push_str(&format!(
        "Average Words per Sentence: {:.1}\n",
        stats.avg_words_per_sentence
    ));
    out.push_str(&format!(
        "Average Syllables per Word: {:.2}\n",
        stats.avg_syllables_per_word
    ));
    out.push_str(&format!(
        "Average Characters per Word: {:.1}\n",
        stats.avg_chars_per_word
    ));

    section(&mut out, "EDUCATIONAL RECOMMENDATIONS");
    out.push_str(&format!("{}\n", interp.educational_context));
    out.push_str(&format!("Target audience: this content is {}.\n", interp.audience));

    section(&mut out, "EXTRACTED TEXT CONTENT");
    out.push_str(&report.extracted_text);
    out.push('\n');

    out.push('\n');
    out.push_str(RULE);
    out.push_str("\nEND OF REPORT\n");
    out.push_str(RULE);
    out.push('\n');

    Ok(out)
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_report, unscoreable_report};

    #[test]
    fn test_report_sections_present() {
        let out = render(&test_report()).expect("render");
        for header in [
            "SOURCE INFORMATION",
            "READABILITY SCORES",
            "SUMMARY ANALYSIS",
            "TEXT STATISTICS",
            "EDUCATIONAL RECOMMENDATIONS",
            "EXTRACTED TEXT CONTENT",
            "END OF REPORT",
        ] {
            assert!(out.contains(header), "missing section {header}");
        }
    }

    #[test]
    fn test_extracted_text_included_in_full() {
        let report = test_report();
        let out = render(&report).expect("render");
        assert!(out.contains(&report.extracted_text));
    }

    #[test]
    fn test_unscoreable_report_still_renders() {
        let out = render(&unscoreable_report()).expect("render");
        assert!(out.contains("Could not analyze the text content"));
        assert!(!out.contains("READABILITY SCORES"));
    }
}
