use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// A named filename layout. Patterns capture disc, track and title.
struct FilenamePattern {
    name: &'static str,
    regex: Regex,
}

/// Tried in order; the first match wins.
static FILENAME_PATTERNS: LazyLock<Vec<FilenamePattern>> = LazyLock::new(|| {
    [
        ("disc-track-title", r"^(\d+)\s*-\s*(\d+)\s*-\s*(.+)$"),
        ("disc-track.title", r"^(\d+)\s*-\s*(\d+)\s*[.-]\s*(.+)$"),
    ]
    .into_iter()
    .map(|(name, pattern)| FilenamePattern {
        name,
        regex: Regex::new(pattern).expect("valid filename pattern"),
    })
    .collect()
});

pub const DEFAULT_DISC: &str = "0";
pub const DEFAULT_TRACK: &str = "00";

/// Disc, track and title parsed out of a track's file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    pub disc: String,
    pub track: String,
    pub title: String,
    /// Extension including the leading dot, or empty.
    pub ext: String,
    /// Name of the pattern that matched; `None` means the defaults were used.
    pub pattern: Option<&'static str>,
}

impl ParsedFilename {
    /// Canonical form: `{disc} - {track}. {title}{ext}`.
    pub fn canonical(&self) -> String {
        synthesize(&self.disc, &self.track, &self.title, &self.ext)
    }
}

pub fn synthesize(disc: &str, track: &str, title: &str, ext: &str) -> String {
    format!("{disc} - {track}. {title}{ext}")
}

/// Parse `file_name`. Names matching no pattern keep the whole stem as the
/// title, with disc `0` and track `00`.
pub fn parse_filename(file_name: &str) -> ParsedFilename {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    for pattern in FILENAME_PATTERNS.iter() {
        if let Some(caps) = pattern.regex.captures(&stem) {
            let title = caps[3].trim_start_matches([' ', '-', '.']).trim();
            return ParsedFilename {
                disc: caps[1].to_string(),
                track: caps[2].to_string(),
                title: title.to_string(),
                ext,
                pattern: Some(pattern.name),
            };
        }
    }

    ParsedFilename {
        disc: DEFAULT_DISC.to_string(),
        track: DEFAULT_TRACK.to_string(),
        title: stem.trim().to_string(),
        ext,
        pattern: None,
    }
}
