//! Change planning: where every track of an album should end up.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::album::AlbumUnit;
use crate::issues::{IssueKind, IssueLog};
use crate::naming::parse_filename;

/// One file move from `source` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedChange {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Every move needed to bring one album to its canonical layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPlan {
    pub source_dir: PathBuf,
    /// Sibling of `source_dir` named `folder_name`; equal to it when the
    /// folder already has its canonical name.
    pub target_dir: PathBuf,
    pub folder_name: String,
    pub changes: Vec<ProposedChange>,
    /// Tracks left where they are because their destination was taken.
    pub held: Vec<PathBuf>,
}

impl AlbumPlan {
    /// No changes means the album is already canonical.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn renames_folder(&self) -> bool {
        !same_path(&self.source_dir, &self.target_dir)
    }
}

pub(crate) fn same_path(a: &Path, b: &Path) -> bool {
    let abs = |p: &Path| std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf());
    abs(a) == abs(b)
}

/// Plan the moves for `unit` into a sibling folder named `folder_name`.
///
/// Files already at their canonical path produce no change. A destination
/// that already exists, or that an earlier file in the same album claimed,
/// is logged under `invalid_filenames` and its file stays where it is.
pub fn plan_album(unit: &AlbumUnit, folder_name: &str, log: &mut IssueLog) -> AlbumPlan {
    let target_dir = match unit.dir.parent() {
        Some(parent) => parent.join(folder_name),
        None => unit.dir.clone(),
    };

    let mut claimed = HashSet::new();
    let mut changes = Vec::new();
    let mut held = Vec::new();
    for source in &unit.files {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parsed = parse_filename(&file_name);
        if parsed.pattern.is_none() {
            debug!("{file_name}: no disc/track pattern, using defaults");
        }
        let destination = target_dir.join(parsed.canonical());

        if same_path(source, &destination) {
            continue;
        }
        if !claimed.insert(destination.clone()) {
            warn!(
                "two tracks map to {}, skipping {}",
                destination.display(),
                source.display()
            );
            log.message(
                IssueKind::InvalidFilenames,
                source,
                format!("Another track in this album also maps to {}", destination.display()),
            );
            held.push(source.clone());
            continue;
        }
        if destination.exists() {
            warn!("destination already exists, skipping: {}", destination.display());
            log.message(
                IssueKind::InvalidFilenames,
                source,
                format!("Destination already exists: {}", destination.display()),
            );
            held.push(source.clone());
            continue;
        }
        changes.push(ProposedChange {
            source: source.clone(),
            destination,
        });
    }

    AlbumPlan {
        source_dir: unit.dir.clone(),
        target_dir,
        folder_name: folder_name.to_string(),
        changes,
        held,
    }
}
