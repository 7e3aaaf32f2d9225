//! Core data models for Readcraft
//!
//! These models are used throughout the codebase for representing
//! language files, text statistics, and analysis results.

use serde::{Deserialize, Serialize};

/// A `.lang` resource file pulled out of an `.mcworld`/`.mctemplate` archive.
///
/// Immutable once read. `size` is the character length of `content`, which is
/// also the key used to select the file that gets analyzed: the scorer only
/// ever runs on the single largest language file in an archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageFile {
    /// Path of the entry inside the archive
    pub path: String,
    /// Decoded text content
    pub content: String,
    /// Character length of `content`
    pub size: usize,
}

impl LanguageFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let size = content.chars().count();
        Self {
            path: path.into(),
            content,
            size,
        }
    }
}

/// Raw counts and averages computed from an extracted text blob.
///
/// Derived once per extraction and embedded in [`ReadabilityScores`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub sentences: usize,
    pub words: usize,
    pub characters: usize,
    pub syllables: usize,
    /// Words with an estimated syllable count of 3 or more
    pub complex_words: usize,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
    pub avg_chars_per_word: f64,
}

/// The seven readability formula results plus the statistics they were
/// computed from.
///
/// Only constructed when the text has at least one sentence and one word;
/// the scorer returns `None` otherwise, and consumers must check before
/// formatting. All values are unrounded; rounding is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    /// 0-100 scale, higher is easier. Clamped into [0, 100].
    pub flesch_reading_ease: f64,
    /// US school grade level. Clamped to >= 0.
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    /// Falls back to the Gunning Fog value for texts under 3 sentences.
    pub smog_index: f64,
    pub coleman_liau: f64,
    pub automated_readability: f64,
    pub linsear_write: f64,
    pub stats: TextStatistics,
}

impl ReadabilityScores {
    /// The six grade-level-type scores, in reporting order.
    ///
    /// Flesch Reading Ease is excluded: it is a 0-100 ease scale, not a
    /// grade estimate.
    pub fn grade_level_scores(&self) -> [f64; 6] {
        [
            self.flesch_kincaid_grade,
            self.gunning_fog,
            self.smog_index,
            self.coleman_liau,
            self.automated_readability,
            self.linsear_write,
        ]
    }
}

/// Everything one analysis run produces, handed to the reporters.
///
/// This is an explicit return value threaded through the caller; there is no
/// ambient "current analysis" state anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Display name of the analyzed archive
    pub archive: String,
    /// Number of `.lang` entries found in the archive
    pub total_lang_files: usize,
    /// Archive path of the largest language file (the one analyzed)
    pub largest_path: String,
    /// Character length of the largest language file
    pub largest_size: usize,
    /// Cleaned natural-language blob extracted from the largest file
    pub extracted_text: String,
    /// `None` when the extracted text had no sentences or no words
    pub scores: Option<ReadabilityScores>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_file_size_is_char_count() {
        let f = LanguageFile::new("texts/en_US.lang", "héllo");
        assert_eq!(f.size, 5);
    }

    #[test]
    fn test_grade_level_scores_excludes_flesch_ease() {
        let stats = TextStatistics {
            sentences: 1,
            words: 2,
            characters: 8,
            syllables: 2,
            complex_words: 0,
            avg_words_per_sentence: 2.0,
            avg_syllables_per_word: 1.0,
            avg_chars_per_word: 4.0,
        };
        let scores = ReadabilityScores {
            flesch_reading_ease: 100.0,
            flesch_kincaid_grade: 1.0,
            gunning_fog: 2.0,
            smog_index: 3.0,
            coleman_liau: 4.0,
            automated_readability: 5.0,
            linsear_write: 6.0,
            stats,
        };
        assert_eq!(scores.grade_level_scores(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
