/// Metadata retriever implementation using lofty
use crate::error::RetrieverError;
use chrono::{DateTime, Utc};
use lofty::{ItemKey, PictureType, TaggedFile, TaggedFileExt};
use std::path::Path;
use std::time::SystemTime;
use tonearm_core::{MetadataKey, MetadataRetriever, RetrieverSource};

/// Metadata retriever backed by the lofty library
pub struct LoftyRetriever;

impl LoftyRetriever {
    /// Create a new retriever
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoftyRetriever {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataRetriever for LoftyRetriever {
    fn open(&self, path: &Path) -> tonearm_core::Result<Box<dyn RetrieverSource>> {
        if !path.exists() {
            return Err(RetrieverError::FileNotFound(path.to_path_buf()).into());
        }

        // Capture the mtime up front; `last_modified` is a filesystem value,
        // not a tag value.
        let modified = std::fs::metadata(path)
            .map_err(RetrieverError::from)?
            .modified()
            .ok();

        let tagged_file = lofty::read_from_path(path).map_err(RetrieverError::from)?;
        tracing::debug!(path = %path.display(), "opened media source");

        Ok(Box::new(LoftySource {
            tagged_file,
            modified,
        }))
    }
}

/// Mapping from a semantic key to lofty's item key.
///
/// Keys with no tag counterpart map to `None` and come out absent for this
/// retriever (`last_modified` is handled separately from the filesystem).
pub(crate) fn tag_key(key: MetadataKey) -> Option<ItemKey> {
    match key {
        MetadataKey::Album => Some(ItemKey::AlbumTitle),
        MetadataKey::Artist => Some(ItemKey::TrackArtist),
        MetadataKey::Comment => Some(ItemKey::Comment),
        MetadataKey::Copyright => Some(ItemKey::CopyrightMessage),
        MetadataKey::CreationTime => Some(ItemKey::RecordingDate),
        MetadataKey::Date => Some(ItemKey::Year),
        MetadataKey::EncodedBy => Some(ItemKey::EncodedBy),
        MetadataKey::Genre => Some(ItemKey::Genre),
        MetadataKey::Language => Some(ItemKey::Language),
        MetadataKey::Performer => Some(ItemKey::Performer),
        MetadataKey::Publisher => Some(ItemKey::Publisher),
        MetadataKey::Title => Some(ItemKey::TrackTitle),
        MetadataKey::Location | MetadataKey::LastModified => None,
    }
}

/// One open media source, scoped to a single call
struct LoftySource {
    tagged_file: TaggedFile,
    modified: Option<SystemTime>,
}

impl LoftySource {
    fn tag(&self) -> Option<&lofty::Tag> {
        self.tagged_file
            .primary_tag()
            .or_else(|| self.tagged_file.first_tag())
    }
}

impl RetrieverSource for LoftySource {
    fn metadata_value(&mut self, key: MetadataKey) -> tonearm_core::Result<Option<String>> {
        if key == MetadataKey::LastModified {
            return Ok(self
                .modified
                .map(|time| DateTime::<Utc>::from(time).to_rfc3339()));
        }

        let Some(item_key) = tag_key(key) else {
            return Ok(None);
        };

        Ok(self
            .tag()
            .and_then(|tag| tag.get_string(&item_key))
            .map(str::to_string))
    }

    fn embedded_picture(&mut self) -> tonearm_core::Result<Option<Vec<u8>>> {
        let Some(tag) = self.tag() else {
            return Ok(None);
        };

        // Prefer front cover, otherwise use first picture
        let pictures = tag.pictures();
        let picture = pictures
            .iter()
            .find(|p| matches!(p.pic_type(), PictureType::CoverFront))
            .or_else(|| pictures.first());

        Ok(picture.map(|p| p.data().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_an_explicit_mapping_entry() {
        // Exactly two keys have no tag counterpart for this retriever
        let unmapped: Vec<_> = MetadataKey::ALL
            .into_iter()
            .filter(|key| tag_key(*key).is_none())
            .collect();
        assert_eq!(
            unmapped,
            vec![MetadataKey::Location, MetadataKey::LastModified]
        );
    }

    #[test]
    fn mapping_queries_the_key_under_iteration() {
        // Distinct semantic keys must resolve to distinct item keys
        assert_eq!(tag_key(MetadataKey::Album), Some(ItemKey::AlbumTitle));
        assert_eq!(tag_key(MetadataKey::Title), Some(ItemKey::TrackTitle));
        assert_ne!(tag_key(MetadataKey::Artist), tag_key(MetadataKey::Album));
    }

    #[test]
    fn open_nonexistent_file_returns_error() {
        let retriever = LoftyRetriever::new();
        let result = retriever.open(Path::new("/nonexistent/file.mp3"));
        assert!(result.is_err());
    }
}
