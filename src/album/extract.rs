use std::path::Path;

use tracing::{debug, warn};

use crate::issues::{IssueKind, IssueLog};
use crate::naming::parse_filename;
use crate::tags::{TagField, TagStore};

use super::model::TrackMetadata;

/// Year from a raw date tag: its first four characters, when all are digits.
pub fn parse_year(raw: &str) -> Option<String> {
    let year: String = raw.chars().take(4).collect();
    if year.chars().count() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Some(year)
    } else {
        None
    }
}

/// Read one track's tags.
///
/// A file whose tags cannot be read is logged under `invalid_metadata` and
/// yields `None`; a missing or malformed date is logged under
/// `invalid_date_metadata` and leaves `year` empty.
pub fn extract_track(
    tags: &dyn TagStore,
    path: &Path,
    log: &mut IssueLog,
) -> Option<TrackMetadata> {
    let handle = match tags.open(path) {
        Ok(handle) => handle,
        Err(e) => {
            warn!("{e}");
            log.error(IssueKind::InvalidMetadata, path, &e);
            return None;
        }
    };

    let raw_date = handle.read_field(TagField::Date);
    let year = raw_date.as_deref().and_then(parse_year);
    if year.is_none() {
        debug!("invalid date {:?} in {}", raw_date, path.display());
        log.invalid_date(path, raw_date.as_deref());
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parsed = parse_filename(&file_name);

    Some(TrackMetadata {
        path: path.to_path_buf(),
        album: handle.read_field(TagField::Album),
        title: handle.read_field(TagField::Title),
        album_artist: handle.read_field(TagField::AlbumArtist),
        year,
        disc: parsed.disc,
        track: parsed.track,
    })
}
