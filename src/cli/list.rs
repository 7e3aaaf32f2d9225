//! `readcraft list` - show the .lang entries in an archive

use crate::archive;
use anyhow::Result;
use std::path::Path;

pub fn run(archive_path: &Path) -> Result<()> {
    let lang_files = archive::read_language_files(archive_path)?;
    let largest_path = archive::largest(&lang_files).map(|f| f.path.clone());

    println!("{} language file(s):", lang_files.len());
    for file in &lang_files {
        let marker = if Some(&file.path) == largest_path.as_ref() {
            "  <- largest"
        } else {
            ""
        };
        println!("  {:>10} chars  {}{}", file.size, file.path, marker);
    }

    Ok(())
}
