use std::io::Write;
use std::path::Path;

use crossterm::style::Stylize;
use tracing::warn;

use crate::album::{AlbumField, AlbumFields, TrackMetadata, check_album};
use crate::apply::AlbumState;
use crate::decide::Resolver;
use crate::display;
use crate::error::Result;
use crate::issues::{IssueKind, IssueLog};
use crate::library::walk_albums;
use crate::tags::{TagField, TagStore};

use super::{RunOutcome, Session, load_album};

/// Review album, album artist and year tags for every album under `root`
/// and write confirmed values back to each track.
pub fn audit(root: &Path, session: &mut Session, log: &mut IssueLog) -> Result<RunOutcome> {
    let settings = session.settings;
    let resolver = Resolver::new(&settings.audit.categories);

    for candidate in walk_albums(root, &settings.library) {
        let name = candidate.name();
        writeln!(session.out, "\nProcessing album folder: {name}")?;
        let Some(unit) = load_album(candidate, session.tags, log) else {
            continue;
        };

        let report = check_album(&unit.tracks, &settings.audit.categories);
        if report.is_consistent() {
            writeln!(session.out, "  {}", "Album metadata is consistent.".yellow())?;
            continue;
        }

        display::consistency_report(session.out, &name, &report)?;
        let fields = resolver.resolve(&report, session.decisions)?;
        for field in AlbumField::ALL {
            if fields.get(field).is_none() {
                log.message(IssueKind::MissingMetadata, &unit.dir, format!("Missing {field}"));
            }
        }

        let state = AlbumState::Planned;
        display::metadata_updates(session.out, &unit.dir, &unit.tracks, &fields)?;
        let state = state.displayed();

        match state.after(session.decisions.confirm_album(&name)?) {
            AlbumState::Applied if session.dry_run => {
                writeln!(session.out, "[DRY RUN] Confirmed. No changes will be made.")?;
            }
            AlbumState::Applied => {
                writeln!(session.out, "Applying changes...")?;
                for track in &unit.tracks {
                    write_album_fields(session.tags, track, &fields, session.out, log)?;
                }
            }
            AlbumState::Skipped => writeln!(session.out, "Skipping changes for this album.")?,
            AlbumState::Aborted => {
                writeln!(session.out, "Quitting the script.")?;
                return Ok(RunOutcome::Aborted);
            }
            AlbumState::Planned | AlbumState::Displayed => {}
        }
    }

    Ok(RunOutcome::Completed)
}

/// Write the non-empty album fields to one track. Failures are logged under
/// `invalid_metadata` and do not stop the album.
fn write_album_fields(
    tags: &dyn TagStore,
    track: &TrackMetadata,
    fields: &AlbumFields,
    out: &mut dyn Write,
    log: &mut IssueLog,
) -> Result<()> {
    let written = tags.open(&track.path).and_then(|mut handle| {
        for (tag, value) in [
            (TagField::Album, &fields.album),
            (TagField::AlbumArtist, &fields.album_artist),
            (TagField::Date, &fields.year),
        ] {
            if let Some(value) = value {
                handle.write_field(tag, value);
            }
        }
        handle.persist()
    });

    match written {
        Ok(()) => writeln!(out, "  Updated metadata for: {}", track.path.display())?,
        Err(e) => {
            warn!("{e}");
            writeln!(out, "  Error updating file: {e}")?;
            log.error(IssueKind::InvalidMetadata, &track.path, &e);
        }
    }
    Ok(())
}
