/// Fixed enumeration of extractable metadata keys
use std::fmt;

/// The closed set of metadata keys a retriever can be asked for.
///
/// The set is fixed by the bridge contract: a retriever is queried once per
/// key and a key appears in the result only when the retriever returns a
/// value for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    /// Album title
    Album,
    /// Track artist
    Artist,
    /// Free-form comment
    Comment,
    /// Copyright notice
    Copyright,
    /// Recording / creation time
    CreationTime,
    /// Date associated with the media
    Date,
    /// Encoding person or software
    EncodedBy,
    /// Genre
    Genre,
    /// Language
    Language,
    /// Recording location
    Location,
    /// Last modification time of the source file
    LastModified,
    /// Performer
    Performer,
    /// Publisher / label
    Publisher,
    /// Track title
    Title,
}

impl MetadataKey {
    /// Every key, in the order the bridge queries them
    pub const ALL: [MetadataKey; 14] = [
        MetadataKey::Album,
        MetadataKey::Artist,
        MetadataKey::Comment,
        MetadataKey::Copyright,
        MetadataKey::CreationTime,
        MetadataKey::Date,
        MetadataKey::EncodedBy,
        MetadataKey::Genre,
        MetadataKey::Language,
        MetadataKey::Location,
        MetadataKey::LastModified,
        MetadataKey::Performer,
        MetadataKey::Publisher,
        MetadataKey::Title,
    ];

    /// Wire name of the key, as it appears in the serialized result
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::Album => "album",
            MetadataKey::Artist => "artist",
            MetadataKey::Comment => "comment",
            MetadataKey::Copyright => "copyright",
            MetadataKey::CreationTime => "creation_time",
            MetadataKey::Date => "date",
            MetadataKey::EncodedBy => "encoded_by",
            MetadataKey::Genre => "genre",
            MetadataKey::Language => "language",
            MetadataKey::Location => "location",
            MetadataKey::LastModified => "last_modified",
            MetadataKey::Performer => "performer",
            MetadataKey::Publisher => "publisher",
            MetadataKey::Title => "title",
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_every_key_once() {
        let unique: HashSet<_> = MetadataKey::ALL.iter().collect();
        assert_eq!(unique.len(), 14);
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<_> = MetadataKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), MetadataKey::ALL.len());
    }

    #[test]
    fn wire_names_match_contract() {
        assert_eq!(MetadataKey::CreationTime.as_str(), "creation_time");
        assert_eq!(MetadataKey::EncodedBy.as_str(), "encoded_by");
        assert_eq!(MetadataKey::LastModified.as_str(), "last_modified");
        assert_eq!(MetadataKey::Title.to_string(), "title");
    }
}
