//! Pedagogical interpretation of readability scores
//!
//! Maps the numeric scores to a difficulty label, target audience, age and
//! grade ranges, and educational-context text. Every mapping here is a pure,
//! total function over the real line; no input produces an error.

use crate::models::ReadabilityScores;
use serde::Serialize;

/// Difficulty label derived from Flesch Reading Ease thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
}

impl Difficulty {
    /// Map a Flesch Reading Ease value to its label. Boundaries are
    /// inclusive: exactly 90.0 is Very Easy.
    pub fn from_flesch_reading_ease(fre: f64) -> Self {
        if fre >= 90.0 {
            Difficulty::VeryEasy
        } else if fre >= 80.0 {
            Difficulty::Easy
        } else if fre >= 70.0 {
            Difficulty::FairlyEasy
        } else if fre >= 60.0 {
            Difficulty::Standard
        } else if fre >= 50.0 {
            Difficulty::FairlyDifficult
        } else if fre >= 30.0 {
            Difficulty::Difficult
        } else {
            Difficulty::VeryDifficult
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::FairlyEasy => "Fairly Easy",
            Difficulty::Standard => "Standard",
            Difficulty::FairlyDifficult => "Fairly Difficult",
            Difficulty::Difficult => "Difficult",
            Difficulty::VeryDifficult => "Very Difficult",
        };
        write!(f, "{label}")
    }
}

/// Human-facing reading-level summary, derived on demand from a
/// [`ReadabilityScores`] and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub difficulty: Difficulty,
    /// Mean of the six grade-level scores
    pub avg_grade_level: f64,
    /// Rounded avg grade + 5
    pub approximate_age: i64,
    /// Who the text is easily understood by
    pub audience: &'static str,
    pub educational_stage: &'static str,
    pub educational_context: String,
    /// Recommended reader ages, inclusive
    pub age_range: (i64, i64),
    /// Recommended school grades, inclusive
    pub grade_range: (i64, i64),
}

impl Interpretation {
    pub fn from_scores(scores: &ReadabilityScores) -> Self {
        let grades = scores.grade_level_scores();
        let avg_grade_level = grades.iter().sum::<f64>() / grades.len() as f64;
        let fre = scores.flesch_reading_ease;
        let difficulty = Difficulty::from_flesch_reading_ease(fre);

        Self {
            difficulty,
            avg_grade_level,
            approximate_age: (avg_grade_level + 5.0).round() as i64,
            audience: audience_description(fre),
            educational_stage: educational_stage(avg_grade_level),
            educational_context: educational_context(avg_grade_level, difficulty),
            age_range: (
                ((avg_grade_level + 4.0).round() as i64).max(6),
                (avg_grade_level + 7.0).round() as i64,
            ),
            grade_range: (
                ((avg_grade_level - 1.0).round() as i64).max(1),
                (avg_grade_level + 2.0).round() as i64,
            ),
        }
    }
}

fn audience_description(fre: f64) -> &'static str {
    if fre >= 90.0 {
        "easily understood by 11-year-olds and below"
    } else if fre >= 80.0 {
        "easily understood by 12-13 year olds"
    } else if fre >= 70.0 {
        "easily understood by 13-15 year olds"
    } else if fre >= 60.0 {
        "easily understood by 15-17 year olds"
    } else if fre >= 50.0 {
        "understood by high school graduates"
    } else if fre >= 30.0 {
        "understood by college-level readers"
    } else {
        "understood by university graduates"
    }
}

fn educational_stage(avg_grade: f64) -> &'static str {
    if avg_grade <= 3.0 {
        "Early Elementary"
    } else if avg_grade <= 6.0 {
        "Upper Elementary / Early Middle"
    } else if avg_grade <= 9.0 {
        "Middle / Early High"
    } else if avg_grade <= 12.0 {
        "High School"
    } else {
        "College / Adult"
    }
}

fn educational_context(avg_grade: f64, difficulty: Difficulty) -> String {
    if avg_grade <= 3.0 {
        "Perfect for early elementary students learning to read independently.".to_string()
    } else if avg_grade <= 6.0 {
        "Ideal for elementary to middle school students.".to_string()
    } else if avg_grade <= 9.0 {
        "Appropriate for middle to high school students.".to_string()
    } else if avg_grade <= 12.0 {
        "Suitable for high school students and above.".to_string()
    } else {
        format!("College-level content requiring advanced reading skills ({difficulty}).")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextStatistics;

    fn scores_with(fre: f64, grade: f64) -> ReadabilityScores {
        ReadabilityScores {
            flesch_reading_ease: fre,
            flesch_kincaid_grade: grade,
            gunning_fog: grade,
            smog_index: grade,
            coleman_liau: grade,
            automated_readability: grade,
            linsear_write: grade,
            stats: TextStatistics {
                sentences: 1,
                words: 1,
                characters: 4,
                syllables: 1,
                complex_words: 0,
                avg_words_per_sentence: 1.0,
                avg_syllables_per_word: 1.0,
                avg_chars_per_word: 4.0,
            },
        }
    }

    #[test]
    fn test_difficulty_boundaries() {
        assert_eq!(
            Difficulty::from_flesch_reading_ease(90.0),
            Difficulty::VeryEasy
        );
        assert_eq!(
            Difficulty::from_flesch_reading_ease(89.9999),
            Difficulty::Easy
        );
        assert_eq!(
            Difficulty::from_flesch_reading_ease(60.0),
            Difficulty::Standard
        );
        assert_eq!(
            Difficulty::from_flesch_reading_ease(29.9),
            Difficulty::VeryDifficult
        );
        assert_eq!(
            Difficulty::from_flesch_reading_ease(-10.0),
            Difficulty::VeryDifficult
        );
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::VeryEasy.to_string(), "Very Easy");
        assert_eq!(Difficulty::FairlyDifficult.to_string(), "Fairly Difficult");
    }

    #[test]
    fn test_average_grade_and_age() {
        let interp = Interpretation::from_scores(&scores_with(65.0, 8.0));
        assert!((interp.avg_grade_level - 8.0).abs() < 1e-9);
        assert_eq!(interp.approximate_age, 13);
        assert_eq!(interp.age_range, (12, 15));
        assert_eq!(interp.grade_range, (7, 10));
        assert_eq!(interp.educational_stage, "Middle / Early High");
    }

    #[test]
    fn test_age_and_grade_floors() {
        // Grade ~0 text: floors kick in
        let interp = Interpretation::from_scores(&scores_with(100.0, 0.0));
        assert_eq!(interp.age_range.0, 6);
        assert_eq!(interp.grade_range.0, 1);
        assert_eq!(interp.educational_stage, "Early Elementary");
        assert_eq!(
            interp.educational_context,
            "Perfect for early elementary students learning to read independently."
        );
    }

    #[test]
    fn test_college_context_names_difficulty() {
        let interp = Interpretation::from_scores(&scores_with(20.0, 14.0));
        assert_eq!(interp.educational_stage, "College / Adult");
        assert!(interp.educational_context.contains("Very Difficult"));
    }

    #[test]
    fn test_audience_thresholds_track_flesch() {
        let interp = Interpretation::from_scores(&scores_with(90.0, 2.0));
        assert_eq!(interp.audience, "easily understood by 11-year-olds and below");
        let interp = Interpretation::from_scores(&scores_with(45.0, 11.0));
        assert_eq!(interp.audience, "understood by college-level readers");
    }
}
