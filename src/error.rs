//! Library error types
//!
//! Typed errors for the archive and analysis layers. The CLI handlers wrap
//! these in `anyhow` at the boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadcraftError {
    /// The input path does not end in `.mcworld` or `.mctemplate`.
    #[error("'{0}' is not a .mcworld or .mctemplate archive")]
    InvalidArchiveType(String),

    #[error("failed to read archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive contained no `.lang` entries. The scorer is never invoked
    /// in this case.
    #[error("no language files found in the archive")]
    NoLanguageFiles,

    /// The extracted text had zero sentences or zero words, so no
    /// readability scores could be computed. Terminal for the run; there is
    /// nothing to retry.
    #[error("could not analyze the text content: no sentences or words after extraction")]
    UnscoreableText,
}
