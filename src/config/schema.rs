use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/reshelve/config.toml` or `~/.config/reshelve/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `RESHELVE__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub audit: AuditSettings,
    pub naming: NamingSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to follow symlinked directories while walking.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "ogg".into(), "wav".into()],
            include_hidden: true,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Allowed album-artist values. Anything else is flagged.
    pub categories: Vec<String>,
}

pub const DEFAULT_CATEGORIES: &[&str] =
    &["Film", "Musical", "Video Game", "Video Game Remix", "Other"];

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Terms meaning "soundtrack" that are dropped from album names
    /// (whole words, case-insensitive).
    pub noise_terms: Vec<String>,
    /// Album name used when nothing usable is left after resolution.
    pub unknown_album: String,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            noise_terms: vec![
                "Original Motion Picture Soundtrack".into(),
                "Original Soundtrack".into(),
                "Soundtrack".into(),
                "OST".into(),
            ],
            unknown_album: "Unknown Album".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Issue log written by `reorganize`.
    pub reorganize_file: String,
    /// Issue log written by `audit`.
    pub audit_file: String,
    /// Issue log written by `prefix`.
    pub prefix_file: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            reorganize_file: "music_reorg_log.json".to_string(),
            audit_file: "metadata_audit_log.json".to_string(),
            prefix_file: "prefix_rename_log.json".to_string(),
        }
    }
}
