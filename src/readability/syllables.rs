//! Heuristic syllable estimation
//!
//! Counts maximal vowel runs with a silent-e correction. This is an
//! approximation, not a dictionary lookup; individual words can be off by a
//! syllable, which the readability formulas tolerate.

/// Estimate the syllable count of a single word.
///
/// The word is lowercased and stripped of non `a-z` characters first. Returns
/// 0 only when nothing alphabetic remains; any surviving word counts as at
/// least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .flat_map(|c| c.to_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if cleaned.is_empty() {
        return 0;
    }

    let mut syllables = 0;
    let mut previous_was_vowel = false;
    for c in cleaned.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    // Silent 'e': "stone" is one syllable, not two
    if cleaned.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("123"), 0);
        assert_eq!(count_syllables("!?"), 0);
    }

    #[test]
    fn test_single_letter_clamps_to_one() {
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("b"), 1);
    }

    #[test]
    fn test_silent_e() {
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("stone"), 1);
        assert_eq!(count_syllables("space"), 1);
    }

    #[test]
    fn test_vowel_runs() {
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("monkey"), 2);
        assert_eq!(count_syllables("queue"), 1);
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(count_syllables("Stone!"), 1);
        assert_eq!(count_syllables("don't"), count_syllables("dont"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_syllables("BANANA"), count_syllables("banana"));
    }
}
