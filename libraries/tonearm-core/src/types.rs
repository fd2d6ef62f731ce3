/// Domain types for the metadata bridge
use crate::keys::MetadataKey;
use serde::{Deserialize, Serialize};

/// Options accepted by a `get` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    /// Also extract the embedded picture, base64-encoded under `thumb`
    pub get_thumb: bool,
}

/// The fixed-shape metadata record returned by a `get` call.
///
/// Every field is optional; presence depends on what the underlying file
/// contains and what the retriever returned for this call. Absent fields are
/// omitted from the serialized form rather than emitted as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Album title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Track artist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Free-form comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Copyright notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    /// Recording / creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    /// Date associated with the media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Encoding person or software
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_by: Option<String>,
    /// Genre
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Recording location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Last modification time of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Performer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    /// Publisher / label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Track title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Base64-encoded embedded picture, present only when requested and found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

impl MediaMetadata {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a metadata key
    pub fn set(&mut self, key: MetadataKey, value: String) {
        *self.slot_mut(key) = Some(value);
    }

    /// Get the value for a metadata key, if present
    pub fn value(&self, key: MetadataKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    fn slot(&self, key: MetadataKey) -> &Option<String> {
        match key {
            MetadataKey::Album => &self.album,
            MetadataKey::Artist => &self.artist,
            MetadataKey::Comment => &self.comment,
            MetadataKey::Copyright => &self.copyright,
            MetadataKey::CreationTime => &self.creation_time,
            MetadataKey::Date => &self.date,
            MetadataKey::EncodedBy => &self.encoded_by,
            MetadataKey::Genre => &self.genre,
            MetadataKey::Language => &self.language,
            MetadataKey::Location => &self.location,
            MetadataKey::LastModified => &self.last_modified,
            MetadataKey::Performer => &self.performer,
            MetadataKey::Publisher => &self.publisher,
            MetadataKey::Title => &self.title,
        }
    }

    fn slot_mut(&mut self, key: MetadataKey) -> &mut Option<String> {
        match key {
            MetadataKey::Album => &mut self.album,
            MetadataKey::Artist => &mut self.artist,
            MetadataKey::Comment => &mut self.comment,
            MetadataKey::Copyright => &mut self.copyright,
            MetadataKey::CreationTime => &mut self.creation_time,
            MetadataKey::Date => &mut self.date,
            MetadataKey::EncodedBy => &mut self.encoded_by,
            MetadataKey::Genre => &mut self.genre,
            MetadataKey::Language => &mut self.language,
            MetadataKey::Location => &mut self.location,
            MetadataKey::LastModified => &mut self.last_modified,
            MetadataKey::Performer => &mut self.performer,
            MetadataKey::Publisher => &mut self.publisher,
            MetadataKey::Title => &mut self.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_value_round_trip_for_every_key() {
        let mut metadata = MediaMetadata::new();
        for key in MetadataKey::ALL {
            assert_eq!(metadata.value(key), None);
            metadata.set(key, key.as_str().to_uppercase());
        }
        for key in MetadataKey::ALL {
            assert_eq!(metadata.value(key), Some(key.as_str().to_uppercase().as_str()));
        }
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let mut metadata = MediaMetadata::new();
        metadata.set(MetadataKey::Title, "Song A".to_string());
        metadata.set(MetadataKey::Artist, "Artist B".to_string());

        let json = serde_json::to_value(&metadata).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["title"], "Song A");
        assert_eq!(object["artist"], "Artist B");
        assert!(!object.contains_key("album"));
        assert!(!object.contains_key("thumb"));
    }

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: ExtractOptions = serde_json::from_str(r#"{"getThumb":true}"#).unwrap();
        assert!(options.get_thumb);

        // Missing field falls back to the default
        let options: ExtractOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.get_thumb);
    }
}
