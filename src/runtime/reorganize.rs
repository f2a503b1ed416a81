use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::album::check_album;
use crate::apply::{AlbumState, ApplyEngine};
use crate::decide::Resolver;
use crate::display;
use crate::error::Result;
use crate::issues::{IssueKind, IssueLog};
use crate::library::walk_albums;
use crate::naming::FolderNameBuilder;
use crate::plan::plan_album;

use super::{RunOutcome, Session, load_album};

/// Bring every album under `root` to the canonical folder and file layout,
/// one album at a time.
pub fn reorganize(root: &Path, session: &mut Session, log: &mut IssueLog) -> Result<RunOutcome> {
    let settings = session.settings;
    let builder = FolderNameBuilder::new(&settings.naming)?;
    let resolver = Resolver::new(&settings.audit.categories);
    let engine = ApplyEngine::new(session.dry_run);
    // Folders this run created or filled; they are already canonical.
    let mut applied_targets: HashSet<PathBuf> = HashSet::new();

    for candidate in walk_albums(root, &settings.library) {
        if applied_targets.contains(&candidate.dir) {
            debug!("{} was written by this run, skipping", candidate.dir.display());
            continue;
        }
        let current_name = candidate.name();
        let Some(mut unit) = load_album(candidate, session.tags, log) else {
            continue;
        };

        display::album_header(session.out, &current_name)?;
        let report = check_album(&unit.tracks, &settings.audit.categories);
        if !report.is_consistent() {
            display::consistency_report(session.out, &current_name, &report)?;
        }
        unit.canonical = resolver.resolve(&report, session.decisions)?;

        let album = match unit.canonical.album.as_deref() {
            Some(album) => album,
            None => {
                log.message(IssueKind::MissingMetadata, &unit.dir, "Missing album name");
                ""
            }
        };
        let folder_name = builder.build(album, &unit.format, unit.canonical.year.as_deref());
        let plan = plan_album(&unit, &folder_name, log);

        let state = AlbumState::Planned;
        display::album_plan(session.out, root, &current_name, &plan)?;
        let state = state.displayed();
        if plan.is_empty() {
            continue;
        }

        match state.after(session.decisions.confirm_album(&current_name)?) {
            AlbumState::Applied => {
                let report = engine.apply(&plan, session.out, log)?;
                if report.target_ready {
                    applied_targets.insert(plan.target_dir.clone());
                } else if !session.dry_run {
                    warn!("{} was not applied", unit.dir.display());
                }
                info!(
                    "{}: moved {}, skipped {}, leftovers {}, source removed: {}",
                    current_name,
                    report.moved,
                    report.skipped,
                    report.leftovers,
                    report.source_removed
                );
            }
            AlbumState::Skipped => writeln!(session.out, "Skipping album changes.")?,
            AlbumState::Aborted => {
                writeln!(session.out, "Quitting the script.")?;
                return Ok(RunOutcome::Aborted);
            }
            AlbumState::Planned | AlbumState::Displayed => {}
        }
    }

    Ok(RunOutcome::Completed)
}
