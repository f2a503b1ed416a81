//! Apply Engine: carries out a confirmed `AlbumPlan` on disk.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crossterm::style::Stylize;
use tracing::{info, warn};

use crate::decide::Confirmation;
use crate::error::Result;
use crate::issues::{IssueKind, IssueLog};
use crate::plan::AlbumPlan;

/// Where one album is in its plan / display / confirm cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlbumState {
    Planned,
    Displayed,
    Applied,
    Skipped,
    /// The user quit; the run stops after this album.
    Aborted,
}

impl AlbumState {
    /// A planned album has been shown to the user.
    pub fn displayed(self) -> AlbumState {
        match self {
            Self::Planned => Self::Displayed,
            state => state,
        }
    }

    /// State after a confirmation answer. Only a displayed album moves on.
    pub fn after(self, answer: Confirmation) -> AlbumState {
        match (self, answer) {
            (Self::Displayed, Confirmation::Yes) => Self::Applied,
            (Self::Displayed, Confirmation::No) => Self::Skipped,
            (Self::Displayed, Confirmation::Quit) => Self::Aborted,
            (state, _) => state,
        }
    }
}

/// What `ApplyEngine::apply` did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// The target directory exists. When `false` nothing was touched.
    pub target_ready: bool,
    pub moved: usize,
    pub skipped: usize,
    /// Non-track items carried over from the source directory.
    pub leftovers: usize,
    pub source_removed: bool,
}

#[derive(Debug, Copy, Clone)]
pub struct ApplyEngine {
    dry_run: bool,
}

impl ApplyEngine {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute `plan`. Existing files are never overwritten: a move whose
    /// destination exists is skipped and logged, and the rest of the album
    /// carries on. In dry-run mode nothing on disk changes.
    pub fn apply(
        &self,
        plan: &AlbumPlan,
        out: &mut dyn Write,
        log: &mut IssueLog,
    ) -> Result<ApplyReport> {
        if self.dry_run {
            writeln!(out, "[DRY RUN] Confirmed. No changes will be made.")?;
            for change in &plan.changes {
                info!(
                    "[DRY RUN] would move {} -> {}",
                    change.source.display(),
                    change.destination.display()
                );
            }
            if plan.renames_folder() {
                info!(
                    "[DRY RUN] would move leftovers and remove {}",
                    plan.source_dir.display()
                );
            }
            return Ok(ApplyReport::default());
        }

        writeln!(out, "Applying changes...")?;
        let mut report = ApplyReport::default();

        if let Err(e) = fs::create_dir_all(&plan.target_dir) {
            warn!("could not create {}: {e}", plan.target_dir.display());
            log.error(IssueKind::InvalidFolders, &plan.target_dir, e);
            return Ok(report);
        }
        report.target_ready = true;

        let mut held: HashSet<PathBuf> = plan.held.iter().cloned().collect();
        for change in &plan.changes {
            if change.destination.exists() {
                warn!(
                    "destination already exists, skipping: {} -> {}",
                    change.source.display(),
                    change.destination.display()
                );
                log.message(
                    IssueKind::InvalidFilenames,
                    &change.source,
                    format!("Destination already exists: {}", change.destination.display()),
                );
                held.insert(change.source.clone());
                report.skipped += 1;
                continue;
            }
            match fs::rename(&change.source, &change.destination) {
                Ok(()) => {
                    writeln!(
                        out,
                        "  Moved: {} -> {}",
                        change.source.display(),
                        change.destination.display()
                    )?;
                    report.moved += 1;
                }
                Err(e) => {
                    warn!("could not move {}: {e}", change.source.display());
                    log.error(IssueKind::InvalidFilenames, &change.source, e);
                    held.insert(change.source.clone());
                    report.skipped += 1;
                }
            }
        }

        if !plan.renames_folder() {
            return Ok(report);
        }

        report.leftovers = move_leftovers(&plan.source_dir, &plan.target_dir, &held, log);

        match fs::remove_dir(&plan.source_dir) {
            Ok(()) => {
                writeln!(out, "  Removed empty folder: {}", plan.source_dir.display())?;
                report.source_removed = true;
            }
            Err(e) => {
                warn!("could not remove {}: {e}", plan.source_dir.display());
                writeln!(
                    out,
                    "  {}",
                    format!(
                        "Warning: Could not remove folder {}. It may not be empty.",
                        plan.source_dir.display()
                    )
                    .yellow()
                )?;
                log.error(IssueKind::InvalidFolders, &plan.source_dir, e);
            }
        }

        Ok(report)
    }
}

/// Move everything still in `source` into `target`, keeping names. Held
/// tracks and items whose name is already taken in `target` stay behind.
fn move_leftovers(
    source: &Path,
    target: &Path,
    held: &HashSet<PathBuf>,
    log: &mut IssueLog,
) -> usize {
    let entries = match fs::read_dir(source) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("could not list {}: {e}", source.display());
            log.error(IssueKind::InvalidFolders, source, e);
            return 0;
        }
    };

    let mut moved = 0;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {e}", source.display());
                continue;
            }
        };
        let from = entry.path();
        if held.contains(&from) {
            continue;
        }
        let to = target.join(entry.file_name());
        if to.exists() {
            warn!("leftover already exists in target: {}", to.display());
            log.message(
                IssueKind::InvalidFolders,
                &from,
                format!("Destination already exists: {}", to.display()),
            );
            continue;
        }
        match fs::rename(&from, &to) {
            Ok(()) => moved += 1,
            Err(e) => {
                warn!("could not move {}: {e}", from.display());
                log.error(IssueKind::InvalidFolders, &from, e);
            }
        }
    }
    moved
}
