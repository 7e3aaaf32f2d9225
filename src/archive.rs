//! Language-file collection from `.mcworld`/`.mctemplate` archives
//!
//! Both formats are plain zip containers; the `zip` crate does the
//! decompression. This layer only filters entries and decodes text; all
//! analysis happens downstream on the returned [`LanguageFile`]s.

use crate::error::ReadcraftError;
use crate::models::LanguageFile;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// Archive extensions the tool accepts, checked case-insensitively.
const SUPPORTED_EXTENSIONS: [&str; 2] = [".mcworld", ".mctemplate"];

/// Whether the path has a supported archive extension.
pub fn is_supported_archive(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Read every `.lang` entry out of the archive at `path`.
///
/// Entries are matched case-insensitively on the `.lang` suffix; directories
/// are skipped. Content is decoded as UTF-8 with replacement for invalid
/// bytes, matching the tolerant text decode the game itself uses. Returns
/// [`ReadcraftError::NoLanguageFiles`] when nothing qualifies.
pub fn read_language_files(path: &Path) -> Result<Vec<LanguageFile>, ReadcraftError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    debug!(entries = archive.len(), "opened archive");

    let mut lang_files = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let entry_path = entry.name().to_string();
        if !entry_path.to_lowercase().ends_with(".lang") {
            continue;
        }

        let mut raw = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut raw)?;
        let content = String::from_utf8_lossy(&raw).into_owned();
        debug!(path = %entry_path, chars = content.chars().count(), "found language file");
        lang_files.push(LanguageFile::new(entry_path, content));
    }

    if lang_files.is_empty() {
        return Err(ReadcraftError::NoLanguageFiles);
    }
    Ok(lang_files)
}

/// The language file with the most content. Ties break to the first
/// encountered. `None` only for an empty slice.
pub fn largest(files: &[LanguageFile]) -> Option<&LanguageFile> {
    files
        .iter()
        .reduce(|best, f| if f.size > best.size { f } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_archive(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).expect("create archive");
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            writer.start_file(*name, options).expect("start entry");
            writer.write_all(content.as_bytes()).expect("write entry");
        }
        writer.finish().expect("finish archive");
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_archive(Path::new("world.mcworld")));
        assert!(is_supported_archive(Path::new("Lesson.MCTEMPLATE")));
        assert!(!is_supported_archive(Path::new("world.zip")));
        assert!(!is_supported_archive(Path::new("mcworld")));
    }

    #[test]
    fn test_reads_only_lang_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("world.mcworld");
        write_archive(
            &path,
            &[
                ("level.dat", "binaryish"),
                ("texts/en_US.lang", "a=Hello there friend"),
                ("texts/readme.txt", "not a lang file"),
                ("texts/DE_de.LANG", "b=Hallo gute Freunde"),
            ],
        );

        let files = read_language_files(&path).expect("lang files");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "texts/en_US.lang");
        assert_eq!(files[1].path, "texts/DE_de.LANG");
    }

    #[test]
    fn test_no_lang_files_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("world.mcworld");
        write_archive(&path, &[("level.dat", "x")]);

        let err = read_language_files(&path).expect_err("should fail");
        assert!(matches!(err, ReadcraftError::NoLanguageFiles));
    }

    #[test]
    fn test_largest_first_wins_on_tie() {
        let files = vec![
            LanguageFile::new("a.lang", "same size"),
            LanguageFile::new("b.lang", "same size"),
            LanguageFile::new("c.lang", "short"),
        ];
        let best = largest(&files).expect("non-empty");
        assert_eq!(best.path, "a.lang");
    }

    #[test]
    fn test_largest_picks_max() {
        let files = vec![
            LanguageFile::new("a.lang", "tiny"),
            LanguageFile::new("b.lang", "much longer content here"),
        ];
        assert_eq!(largest(&files).expect("non-empty").path, "b.lang");
        assert!(largest(&[]).is_none());
    }
}
