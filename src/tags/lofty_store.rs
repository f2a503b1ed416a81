use std::path::{Path, PathBuf};

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::prelude::*;
use lofty::tag::{ItemKey, Tag, TagType};

use tracing::debug;

use super::{TagField, TagHandle, TagStore};
use crate::error::TagError;

/// `TagStore` backed by `lofty`, reading the primary tag of each file.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyStore;

impl TagStore for LoftyStore {
    fn open(&self, path: &Path) -> Result<Box<dyn TagHandle>, TagError> {
        let tagged = lofty::read_from_path(path).map_err(|e| TagError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let tag = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .cloned()
            .unwrap_or_else(|| Tag::new(tagged.primary_tag_type()));

        Ok(Box::new(LoftyHandle {
            path: path.to_path_buf(),
            tag,
            dirty: false,
        }))
    }
}

struct LoftyHandle {
    path: PathBuf,
    tag: Tag,
    dirty: bool,
}

fn item_key(field: TagField) -> ItemKey {
    match field {
        TagField::Album => ItemKey::AlbumTitle,
        TagField::Title => ItemKey::TrackTitle,
        TagField::AlbumArtist => ItemKey::AlbumArtist,
        TagField::Date => ItemKey::RecordingDate,
    }
}

impl TagHandle for LoftyHandle {
    fn read_field(&self, field: TagField) -> Option<String> {
        let value = self.tag.get_string(item_key(field)).or_else(|| match field {
            TagField::Date => self.tag.get_string(ItemKey::Year),
            _ => None,
        })?;
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn write_field(&mut self, field: TagField, value: &str) {
        debug!("{}: {} = {value:?}", self.path.display(), field.name());
        self.tag.insert_text(item_key(field), value.to_string());
        // Vorbis comments only know DATE; other formats keep a separate year frame.
        if field == TagField::Date && self.tag.tag_type() != TagType::VorbisComments {
            self.tag.insert_text(ItemKey::Year, value.to_string());
        }
        self.dirty = true;
    }

    fn persist(&mut self) -> Result<(), TagError> {
        if !self.dirty {
            return Ok(());
        }
        self.tag
            .save_to_path(&self.path, WriteOptions::default())
            .map_err(|e| TagError::Write {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        self.dirty = false;
        Ok(())
    }
}
