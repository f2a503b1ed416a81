use std::fmt;
use std::path::{Path, PathBuf};

/// Tags read from one track. Disc and track numbers come from the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub path: PathBuf,
    pub album: Option<String>,
    pub title: Option<String>,
    pub album_artist: Option<String>,
    /// Four decimal digits, or `None` when the date tag is missing or malformed.
    pub year: Option<String>,
    pub disc: String,
    pub track: String,
}

/// The album-wide fields that must agree across tracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AlbumField {
    AlbumName,
    AlbumArtist,
    Year,
}

impl AlbumField {
    pub const ALL: [AlbumField; 3] = [Self::AlbumName, Self::AlbumArtist, Self::Year];

    pub fn label(self) -> &'static str {
        match self {
            Self::AlbumName => "Album Name",
            Self::AlbumArtist => "Album Artist",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for AlbumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Album-wide values: provisional before resolution, canonical after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumFields {
    pub album: Option<String>,
    pub album_artist: Option<String>,
    pub year: Option<String>,
}

impl AlbumFields {
    pub fn get(&self, field: AlbumField) -> Option<&str> {
        match field {
            AlbumField::AlbumName => self.album.as_deref(),
            AlbumField::AlbumArtist => self.album_artist.as_deref(),
            AlbumField::Year => self.year.as_deref(),
        }
    }

    pub fn set(&mut self, field: AlbumField, value: Option<String>) {
        match field {
            AlbumField::AlbumName => self.album = value,
            AlbumField::AlbumArtist => self.album_artist = value,
            AlbumField::Year => self.year = value,
        }
    }
}

/// One directory of tracks, handled as a single reorganization unit.
#[derive(Debug, Clone)]
pub struct AlbumUnit {
    pub dir: PathBuf,
    /// Every audio file in `dir`, including ones whose tags could not be read.
    pub files: Vec<PathBuf>,
    /// Metadata for the files whose tags were read.
    pub tracks: Vec<TrackMetadata>,
    /// Unanimous values, or values confirmed by the resolver.
    pub canonical: AlbumFields,
    /// Uppercased extension of the first audio file, e.g. `FLAC`.
    pub format: String,
}

/// Uppercased extension of `path`, without the dot.
pub fn audio_format(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}
