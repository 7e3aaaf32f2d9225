//! Readcraft - readability analysis for Minecraft Education worlds
//!
//! Extracts the natural-language strings from the `.lang` resource files
//! inside an `.mcworld`/`.mctemplate` archive and scores them with seven
//! classic readability formulas, plus a reading-level interpretation aimed
//! at educators.
//!
//! The analysis core (`extract`, `readability`, `interpret`) is pure and
//! synchronous: no shared state, no I/O, safe to call concurrently on
//! independent inputs. Archive handling and reporting live at the edges.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod interpret;
pub mod models;
pub mod pipeline;
pub mod readability;
pub mod reporters;

pub use error::ReadcraftError;
pub use extract::{extract_readable_text, ExtractOptions};
pub use interpret::{Difficulty, Interpretation};
pub use models::{AnalysisReport, LanguageFile, ReadabilityScores, TextStatistics};
pub use readability::score;
pub use readability::syllables::count_syllables;
