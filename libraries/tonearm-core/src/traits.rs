/// Core traits for the metadata bridge
use crate::error::Result;
use crate::keys::MetadataKey;
use std::path::Path;

/// Metadata retriever trait
///
/// Implementers wrap whatever component actually reads metadata out of a
/// media container. The bridge takes a retriever as an explicit dependency,
/// so a substitute implementation can be slotted in for tests.
pub trait MetadataRetriever: Send + Sync {
    /// Open a media source for a single call.
    ///
    /// The returned source is scoped to the call: dropping it releases
    /// whatever the retriever holds open, on every exit path.
    ///
    /// # Errors
    /// Returns an error if the path cannot be opened or probed
    fn open(&self, path: &Path) -> Result<Box<dyn RetrieverSource>>;
}

/// One open media source, valid for a single call
pub trait RetrieverSource: Send {
    /// Extract the value for a metadata key.
    ///
    /// `Ok(None)` means the file carries no value for this key; it is not a
    /// failure and the key is simply left out of the result.
    ///
    /// # Errors
    /// Returns an error if reading from the source fails
    fn metadata_value(&mut self, key: MetadataKey) -> Result<Option<String>>;

    /// Extract the raw bytes of the embedded picture, if the file has one.
    ///
    /// # Errors
    /// Returns an error if reading from the source fails
    fn embedded_picture(&mut self) -> Result<Option<Vec<u8>>>;
}
