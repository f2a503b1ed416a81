use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::AlbumCandidate;

pub(super) fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            settings
                .extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.'))
                .filter(|e| !e.is_empty())
                .any(|e| e.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

pub(super) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// True when any component of `path` below `root` starts with a dot. The
/// root itself may be hidden.
fn hidden_below(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| match c {
            Component::Normal(name) => name.to_string_lossy().starts_with('.'),
            _ => false,
        })
}

/// Lazy, depth-first sequence of album candidates under a library root.
///
/// Children are yielded before their parents and the root itself is never
/// yielded. Directory listings are read as the walk goes, so they can be
/// stale after earlier candidates were moved; the reorganizer skips folders
/// it already wrote to.
pub struct AlbumWalker {
    inner: walkdir::IntoIter,
    root: PathBuf,
    settings: LibrarySettings,
}

/// Start a fresh walk of `root`. Calling this again restarts from scratch.
pub fn walk_albums(root: &Path, settings: &LibrarySettings) -> AlbumWalker {
    // No filter_entry: in contents-first order it would prune the parent of
    // a hidden directory instead of the directory itself.
    let inner = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .follow_links(settings.follow_links)
        .sort_by_file_name()
        .into_iter();

    AlbumWalker {
        inner,
        root: root.to_path_buf(),
        settings: settings.clone(),
    }
}

impl AlbumWalker {
    fn candidate(&self, dir: &Path) -> Option<AlbumCandidate> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("skipping {}: {e}", dir.display());
                return None;
            }
        };

        let mut audio_files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|e| e.path())
            .filter(|p| self.settings.include_hidden || !is_hidden(p))
            .filter(|p| is_audio_file(p, &self.settings))
            .collect();

        if audio_files.is_empty() {
            return None;
        }
        audio_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Some(AlbumCandidate {
            dir: dir.to_path_buf(),
            audio_files,
        })
    }
}

impl Iterator for AlbumWalker {
    type Item = AlbumCandidate;

    fn next(&mut self) -> Option<AlbumCandidate> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable library entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            if !self.settings.include_hidden && hidden_below(&self.root, entry.path()) {
                continue;
            }
            if let Some(candidate) = self.candidate(entry.path()) {
                return Some(candidate);
            }
        }
    }
}
