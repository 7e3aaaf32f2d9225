//! `readcraft analyze` - the full extraction + scoring pipeline

use crate::config::Config;
use crate::error::ReadcraftError;
use crate::pipeline;
use crate::reporters;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

pub fn run(
    archive: &Path,
    format: &str,
    output: Option<&Path>,
    dump_text: Option<&Path>,
) -> Result<()> {
    // Progress only makes sense for interactive terminal output
    let progress = if format == "text" && output.is_none() {
        let bar = ProgressBar::new(100);
        bar.set_style(progress_style());
        Some(bar)
    } else {
        None
    };

    tick(&progress, 10, "Reading archive...");
    let config = Config::load_for_archive(archive);

    tick(&progress, 30, "Extracting language files...");
    let report = pipeline::analyze_archive(archive, &config.extract_options())
        .with_context(|| format!("failed to analyze {}", archive.display()))?;

    tick(&progress, 80, "Analyzing content...");
    if report.scores.is_none() {
        finish(&progress);
        return Err(ReadcraftError::UnscoreableText.into());
    }

    if let Some(path) = dump_text {
        std::fs::write(path, &report.extracted_text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote extracted text");
    }

    tick(&progress, 100, "Complete!");
    finish(&progress);

    let rendered = reporters::report(&report, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn tick(bar: &Option<ProgressBar>, pos: u64, msg: &'static str) {
    if let Some(bar) = bar {
        bar.set_position(pos);
        bar.set_message(msg);
    }
}

fn finish(bar: &Option<ProgressBar>) {
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% {msg}")
        .expect("valid template")
        .progress_chars("█▓▒░  ")
}
