use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::decide::Confirmation;
use crate::error::Result;
use crate::issues::{IssueKind, IssueLog};

use super::{RunOutcome, Session};

/// Put `prefix` in front of the name of every file directly inside `dir`,
/// one confirmed file at a time. Subdirectories are left alone and existing
/// files are never overwritten.
pub fn prefix_files(
    dir: &Path,
    prefix: &str,
    session: &mut Session,
    log: &mut IssueLog,
) -> Result<RunOutcome> {
    let include_hidden = session.settings.library.include_hidden;
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter(|entry| include_hidden || !entry.file_name().to_string_lossy().starts_with('.'))
        .map(|entry| entry.path())
        .collect();
    // Listed once up front, so a renamed file is never offered again.
    files.sort();

    for source in files {
        let Some(name) = source.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let new_name = format!("{prefix}{name}");
        let destination = dir.join(&new_name);

        if destination.exists() {
            writeln!(session.out, "  Skipping '{name}' as '{new_name}' already exists.")?;
            log.message(
                IssueKind::InvalidFilenames,
                &source,
                format!("Destination already exists: {}", destination.display()),
            );
            continue;
        }

        writeln!(session.out, "About to rename '{name}' to '{new_name}'")?;
        match session.decisions.confirm_rename(&name, &new_name)? {
            Confirmation::Yes if session.dry_run => {
                writeln!(session.out, "[DRY RUN] Would rename '{name}' to '{new_name}'")?;
            }
            Confirmation::Yes => rename_one(&source, &destination, &name, &new_name, session, log)?,
            Confirmation::No => writeln!(session.out, "Skipped renaming '{name}'")?,
            Confirmation::Quit => {
                writeln!(session.out, "Quitting the script.")?;
                return Ok(RunOutcome::Aborted);
            }
        }
    }

    writeln!(session.out, "Operation completed.")?;
    Ok(RunOutcome::Completed)
}

fn rename_one(
    source: &Path,
    destination: &Path,
    name: &str,
    new_name: &str,
    session: &mut Session,
    log: &mut IssueLog,
) -> Result<()> {
    // The name may have been taken while the question was open.
    if destination.exists() {
        writeln!(session.out, "  Skipping '{name}' as '{new_name}' already exists.")?;
        log.message(
            IssueKind::InvalidFilenames,
            source,
            format!("Destination already exists: {}", destination.display()),
        );
        return Ok(());
    }
    match fs::rename(source, destination) {
        Ok(()) => {
            debug!("{} -> {}", source.display(), destination.display());
            writeln!(session.out, "Renamed '{name}' to '{new_name}'")?;
        }
        Err(e) => {
            warn!("could not rename {}: {e}", source.display());
            writeln!(session.out, "  Error renaming '{name}': {e}")?;
            log.error(IssueKind::InvalidFilenames, source, e);
        }
    }
    Ok(())
}
