//! Tag Reader/Writer capability.
//!
//! The pipeline only touches tags through `TagStore`, so it can run against
//! real files (`LoftyStore`) or an in-memory fake in tests.

mod lofty_store;
#[cfg(test)]
mod memory;

use std::path::Path;

use crate::error::TagError;

pub use lofty_store::LoftyStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// The tag fields the pipeline reads and writes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagField {
    Album,
    Title,
    AlbumArtist,
    /// Raw date text; the first four characters are the year.
    Date,
}

impl TagField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Title => "title",
            Self::AlbumArtist => "albumartist",
            Self::Date => "date",
        }
    }
}

/// Opens music files for tag access.
pub trait TagStore {
    fn open(&self, path: &Path) -> Result<Box<dyn TagHandle>, TagError>;
}

/// Tags of one open file. Writes are buffered until `persist`.
pub trait TagHandle {
    /// Return the field's text, or `None` when absent or blank.
    fn read_field(&self, field: TagField) -> Option<String>;
    fn write_field(&mut self, field: TagField, value: &str);
    fn persist(&mut self) -> Result<(), TagError>;
}
