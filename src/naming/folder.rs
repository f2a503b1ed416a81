use std::sync::LazyLock;

use regex::Regex;

use crate::config::NamingSettings;
use crate::error::Result;

use super::sanitize::sanitize_component;

/// Formats recognized in a bare `(FORMAT)` suffix left by an earlier run
/// that had no year.
const KNOWN_FORMATS: &[&str] = &["MP3", "FLAC", "OGG", "WAV"];

/// A trailing ` (FORMAT) [YEAR]` block.
static FORMAT_YEAR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^()]*\)\s*\[\d{4}\]$").expect("valid regex"));

/// A trailing ` (SOMETHING)` block; only stripped when it names a format.
static PAREN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(([^()]*)\)$").expect("valid regex"));

/// `Name [Artist]`.
static EMBEDDED_ARTIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\[([^\[\]]+)\]$").expect("valid regex"));

/// `()`, `[]` or `{}` left behind once a noise term is removed.
static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]|\{\s*\}").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Builds canonical album folder names:
/// `Name [Artist] (FORMAT) [YEAR]` or `Name (FORMAT) [YEAR]`.
///
/// Building from a previous result with the same format and year returns it
/// unchanged.
#[derive(Debug, Clone)]
pub struct FolderNameBuilder {
    noise: Option<Regex>,
    unknown_album: String,
}

impl FolderNameBuilder {
    pub fn new(settings: &NamingSettings) -> Result<Self> {
        let mut terms: Vec<&str> = settings
            .noise_terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        // Longest first, so a full phrase wins over a word inside it.
        terms.sort_by_key(|t| std::cmp::Reverse(t.len()));

        let noise = if terms.is_empty() {
            None
        } else {
            let alternation = terms
                .iter()
                .map(|t| whole_word(t))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!("(?i){alternation}"))?)
        };

        Ok(Self {
            noise,
            unknown_album: settings.unknown_album.clone(),
        })
    }

    pub fn build(&self, album: &str, format: &str, year: Option<&str>) -> String {
        let mut name = self.clean(strip_format_suffix(album, format));
        if name.is_empty() {
            name = self.unknown_album.clone();
        }

        let head = match EMBEDDED_ARTIST.captures(&name) {
            Some(caps) => {
                let title = caps[1].trim();
                let artist = caps[2].trim();
                if title.is_empty() {
                    format!("[{artist}]")
                } else {
                    format!("{title} [{artist}]")
                }
            }
            None => name,
        };

        let mut folder = format!("{head} ({format})");
        if let Some(year) = year.map(str::trim).filter(|y| !y.is_empty()) {
            folder.push_str(&format!(" [{year}]"));
        }
        sanitize_component(&folder)
    }

    /// Sanitize, drop noise terms and trim edges until nothing changes.
    ///
    /// Each step can expose work for another (removing `:` can complete a
    /// noise word, trimming can leave a trailing period), so a single pass is
    /// not stable. Every step only removes characters or swaps `/` for `-`,
    /// so this terminates.
    fn clean(&self, album: &str) -> String {
        let mut current = album.to_string();
        loop {
            let sanitized = sanitize_component(&current);
            let next = trim_edges(&self.remove_noise(&sanitized));
            if next == current {
                return next;
            }
            current = next;
        }
    }

    fn remove_noise(&self, name: &str) -> String {
        let stripped = match &self.noise {
            Some(re) => {
                let removed = re.replace_all(name, "");
                EMPTY_BRACKETS.replace_all(&removed, "").into_owned()
            }
            None => name.to_string(),
        };
        WHITESPACE_RUN.replace_all(stripped.trim(), " ").into_owned()
    }
}

/// Escape `term`, anchoring it on word boundaries where it starts or ends
/// with a word character.
fn whole_word(term: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let start = if is_word(term.chars().next()) { r"\b" } else { "" };
    let end = if is_word(term.chars().last()) { r"\b" } else { "" };
    format!("{start}{}{end}", regex::escape(term))
}

fn strip_format_suffix<'a>(album: &'a str, format: &str) -> &'a str {
    if let Some(m) = FORMAT_YEAR_SUFFIX.find(album) {
        return &album[..m.start()];
    }
    if let Some(caps) = PAREN_SUFFIX.captures(album) {
        let inner = caps[1].trim();
        let names_format = inner.eq_ignore_ascii_case(format)
            || KNOWN_FORMATS.iter().any(|f| f.eq_ignore_ascii_case(inner));
        if names_format {
            if let Some(m) = caps.get(0) {
                return &album[..m.start()];
            }
        }
    }
    album
}

/// Drop brackets, parentheses, braces, dashes and whitespace from both ends.
///
/// A bracket pair that frames the edge of the name (`Name [Artist]`,
/// `[Artist] Name`) keeps its bracket.
fn trim_edges(name: &str) -> String {
    let is_leading = |c: char| c.is_whitespace() || matches!(c, '-' | '(' | '{' | '[');
    let is_trailing = |c: char| c.is_whitespace() || matches!(c, '-' | ')' | '}' | ']');

    let rest = name.trim_start_matches(is_leading);
    let leading_run = &name[..name.len() - rest.len()];

    let body = rest.trim_end_matches(is_trailing);
    let trailing_run = &rest[body.len()..];

    let mut out = String::with_capacity(name.len());
    if leading_run.ends_with('[') && rest.contains(']') {
        out.push('[');
    }
    out.push_str(body);
    if trailing_run.starts_with(']') && out.contains('[') {
        out.push(']');
    }
    out
}
