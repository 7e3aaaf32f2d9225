//! `readcraft extract` - text extraction without scoring

use crate::archive;
use crate::config::Config;
use crate::error::ReadcraftError;
use crate::extract::extract_readable_text_with;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(archive_path: &Path, output: Option<&Path>) -> Result<()> {
    let config = Config::load_for_archive(archive_path);
    let lang_files = archive::read_language_files(archive_path)?;
    let largest = archive::largest(&lang_files).ok_or(ReadcraftError::NoLanguageFiles)?;

    let text = extract_readable_text_with(&largest.content, &config.extract_options());

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Extracted text written to {}", path.display());
        }
        None => println!("{text}"),
    }

    Ok(())
}
