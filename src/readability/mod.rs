//! Readability scoring
//!
//! Computes sentence/word/character/syllable statistics from an extracted
//! text blob and derives seven classic readability formulas from them:
//! Flesch Reading Ease, Flesch-Kincaid Grade, Gunning Fog, SMOG, Coleman-Liau,
//! Automated Readability Index, and Linsear Write.
//!
//! The scorer is a pure function: same input, bit-identical output. It never
//! divides before checking counts, so there are no numeric edge cases to
//! handle downstream.

pub mod syllables;

use crate::models::{ReadabilityScores, TextStatistics};
use syllables::count_syllables;

/// Score an extracted text blob.
///
/// Returns `None` when the text has zero sentences or zero words; callers
/// must treat that as "nothing to report", not as a retryable failure.
///
/// Tokenization: sentences are the non-blank segments between `.`/`!`/`?`
/// runs; words are whitespace-separated tokens; characters are the char
/// count with all whitespace removed. No rounding happens here.
pub fn score(text: &str) -> Option<ReadabilityScores> {
    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();
    let character_count = text.chars().filter(|c| !c.is_whitespace()).count();

    if sentence_count == 0 || words.is_empty() {
        return None;
    }
    let word_count = words.len();

    let syllable_counts: Vec<usize> = words.iter().map(|w| count_syllables(w)).collect();
    let total_syllables: usize = syllable_counts.iter().sum();
    let complex_words = syllable_counts.iter().filter(|&&c| c >= 3).count();

    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = total_syllables as f64 / word_count as f64;
    let avg_chars_per_word = character_count as f64 / word_count as f64;

    // Flesch Reading Ease, clamped into its nominal 0-100 band
    let flesch_reading_ease =
        (206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables_per_word)
            .clamp(0.0, 100.0);

    // Flesch-Kincaid Grade Level, negative grades clamp to 0
    let flesch_kincaid_grade =
        (0.39 * avg_words_per_sentence + 11.8 * avg_syllables_per_word - 15.59).max(0.0);

    // Gunning Fog Index
    let complex_word_percentage = complex_words as f64 / word_count as f64 * 100.0;
    let gunning_fog = 0.4 * (avg_words_per_sentence + complex_word_percentage);

    // SMOG needs a minimum sample of sentences to be meaningful
    let smog_index = if sentence_count >= 3 {
        1.043 * (complex_words as f64 * (30.0 / sentence_count as f64)).sqrt() + 3.1291
    } else {
        gunning_fog
    };

    // Coleman-Liau Index: letters and sentences per 100 words
    let l = character_count as f64 / word_count as f64 * 100.0;
    let s = sentence_count as f64 / word_count as f64 * 100.0;
    let coleman_liau = 0.0588 * l - 0.296 * s - 15.8;

    // Automated Readability Index
    let automated_readability =
        4.71 * avg_chars_per_word + 0.5 * avg_words_per_sentence - 21.43;

    // Linsear Write: easy words (<= 2 syllables) weigh 1, hard words weigh 3
    let easy_words = word_count - complex_words;
    let hard_words = complex_words;
    let lw_raw = (easy_words as f64 + hard_words as f64 * 3.0) / sentence_count as f64;
    let linsear_write = if lw_raw > 20.0 {
        lw_raw / 2.0
    } else {
        (lw_raw - 2.0) / 2.0
    };

    Some(ReadabilityScores {
        flesch_reading_ease,
        flesch_kincaid_grade,
        gunning_fog,
        smog_index,
        coleman_liau,
        automated_readability,
        linsear_write,
        stats: TextStatistics {
            sentences: sentence_count,
            words: word_count,
            characters: character_count,
            syllables: total_syllables,
            complex_words,
            avg_words_per_sentence,
            avg_syllables_per_word,
            avg_chars_per_word,
        },
    })
}
