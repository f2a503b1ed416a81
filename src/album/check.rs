use super::model::{AlbumField, AlbumFields, TrackMetadata};

/// Provisional album-wide values and the fields that need resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub provisional: AlbumFields,
    /// Flagged fields, in `AlbumField::ALL` order.
    pub flagged: Vec<AlbumField>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.flagged.is_empty()
    }
}

/// First non-empty value wins; the field is consistent when every other
/// non-empty value equals it.
fn provisional<'a>(values: impl Iterator<Item = Option<&'a str>>) -> (Option<String>, bool) {
    let mut first: Option<&str> = None;
    let mut agree = true;
    for value in values.flatten() {
        match first {
            None => first = Some(value),
            Some(f) if f != value => agree = false,
            Some(_) => {}
        }
    }
    (first.map(str::to_string), agree)
}

/// Check album name, album artist and year across `tracks`.
///
/// A field is flagged when it has no value, when tracks disagree, or (album
/// artist only) when the value is not one of `categories`.
pub fn check_album(tracks: &[TrackMetadata], categories: &[String]) -> ConsistencyReport {
    let (album, album_agrees) = provisional(tracks.iter().map(|t| t.album.as_deref()));
    let (artist, artist_agrees) =
        provisional(tracks.iter().map(|t| t.album_artist.as_deref()));
    let (year, year_agrees) = provisional(tracks.iter().map(|t| t.year.as_deref()));

    let mut flagged = Vec::new();
    if album.is_none() || !album_agrees {
        flagged.push(AlbumField::AlbumName);
    }
    let artist_allowed = artist
        .as_ref()
        .is_some_and(|a| categories.iter().any(|c| c == a));
    if !artist_allowed || !artist_agrees {
        flagged.push(AlbumField::AlbumArtist);
    }
    if year.is_none() || !year_agrees {
        flagged.push(AlbumField::Year);
    }

    ConsistencyReport {
        provisional: AlbumFields {
            album,
            album_artist: artist,
            year,
        },
        flagged,
    }
}
