//! Natural-language extraction from `.lang` file content
//!
//! `.lang` values mix UI prose with Minecraft color codes, placeholder
//! blocks, and key-reference tokens. The cleaning chain strips the markup in
//! a fixed order (later patterns assume earlier ones already ran), then a
//! filter keeps only fragments that look like natural language.

use regex::Regex;
use std::sync::OnceLock;

/// Thresholds for the natural-language filter.
///
/// The defaults match the canonical pipeline; `min_words = 2` deliberately
/// drops single-word UI labels like "Stone".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Fragments must be strictly longer than this many characters
    pub min_fragment_len: usize,
    /// Fragments must split into at least this many space-separated tokens
    pub min_words: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_fragment_len: 3,
            min_words: 2,
        }
    }
}

/// Cleaning patterns, compiled once.
struct Patterns {
    /// `§` followed by a color/formatting code character
    color_code: Regex,
    /// `###{...}` placeholder blocks (e.g. `###{LOCKED}`)
    hash_placeholder: Regex,
    /// Runs of 2+ `#`
    hash_run: Regex,
    /// Runs of 2+ `:`
    colon_run: Regex,
    /// Runs of 2+ `~`
    tilde_run: Regex,
    /// Runs of 2+ `_`
    underscore_run: Regex,
    /// `:{...}:` key-reference tokens
    colon_key: Regex,
    /// Remaining `{...}` blocks
    brace_block: Regex,
    /// `[...]` blocks
    bracket_block: Regex,
    /// `(...)` blocks
    paren_block: Regex,
    /// Noisy punctuation with no prose value
    noise_chars: Regex,
    /// Whitespace runs, collapsed to a single space
    whitespace: Regex,
    /// Purely numeric, optionally one decimal point
    numeric_only: Regex,
    /// Entirely non-alphanumeric, non-space
    symbols_only: Regex,
    /// At least one ASCII letter
    has_letter: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        color_code: Regex::new(r"(?i)§[0-9a-fk-or]").expect("valid regex"),
        hash_placeholder: Regex::new(r"###\{[^}]*\}").expect("valid regex"),
        hash_run: Regex::new(r"##+").expect("valid regex"),
        colon_run: Regex::new(r":{2,}").expect("valid regex"),
        tilde_run: Regex::new(r"~{2,}").expect("valid regex"),
        underscore_run: Regex::new(r"_{2,}").expect("valid regex"),
        colon_key: Regex::new(r":\{[^}]*\}:").expect("valid regex"),
        brace_block: Regex::new(r"\{[^}]*\}").expect("valid regex"),
        bracket_block: Regex::new(r"\[[^\]]*\]").expect("valid regex"),
        paren_block: Regex::new(r"\([^)]*\)").expect("valid regex"),
        noise_chars: Regex::new(r"[#$%^&*+=<>|\\]").expect("valid regex"),
        whitespace: Regex::new(r"\s+").expect("valid regex"),
        numeric_only: Regex::new(r"^\d+\.?\d*$").expect("valid regex"),
        symbols_only: Regex::new(r"^[^a-zA-Z0-9\s]+$").expect("valid regex"),
        has_letter: Regex::new(r"[a-zA-Z]").expect("valid regex"),
    })
}

/// Extract the readable prose from one `.lang` file's content, using default
/// thresholds.
pub fn extract_readable_text(content: &str) -> String {
    extract_readable_text_with(content, &ExtractOptions::default())
}

/// Extract the readable prose from one `.lang` file's content.
///
/// Per line: comments (`#`) and lines without a `=` separator are skipped;
/// the value after the first `=` is cleaned and kept only if it passes the
/// natural-language filter. Surviving fragments are joined with single
/// spaces, in source line order.
pub fn extract_readable_text_with(content: &str, opts: &ExtractOptions) -> String {
    let mut fragments: Vec<String> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((_key, value)) = trimmed.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        let cleaned = clean_value(value);
        if is_readable(&cleaned, opts) {
            fragments.push(cleaned);
        }
    }

    fragments.join(" ")
}

/// Apply the cleaning chain to a raw `.lang` value. Order matters: the
/// `###{...}` pattern must run before the bare `##+` and `{...}` ones.
fn clean_value(value: &str) -> String {
    let p = patterns();
    let v = value.trim();
    let v = p.color_code.replace_all(v, "");
    let v = v.replace("\\n", " ");
    let v = p.hash_placeholder.replace_all(&v, "");
    let v = p.hash_run.replace_all(&v, "");
    let v = p.colon_run.replace_all(&v, "");
    let v = p.tilde_run.replace_all(&v, "");
    let v = p.underscore_run.replace_all(&v, "");
    let v = p.colon_key.replace_all(&v, "");
    let v = p.brace_block.replace_all(&v, "");
    let v = p.bracket_block.replace_all(&v, "");
    let v = p.paren_block.replace_all(&v, "");
    let v = p.noise_chars.replace_all(&v, "");
    let v = p.whitespace.replace_all(&v, " ");
    v.trim().to_string()
}

/// Keep only fragments that plausibly contain natural language.
fn is_readable(fragment: &str, opts: &ExtractOptions) -> bool {
    let p = patterns();
    !fragment.is_empty()
        && fragment.chars().count() > opts.min_fragment_len
        && p.has_letter.is_match(fragment)
        && !p.numeric_only.is_match(fragment)
        && !p.symbols_only.is_match(fragment)
        && fragment.split(' ').count() >= opts.min_words
}
