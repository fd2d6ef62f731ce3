/// Asynchronous bridge over a metadata retriever
use crate::retriever::LoftyRetriever;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tonearm_core::{
    BridgeError, ExtractOptions, MediaMetadata, MetadataKey, MetadataRetriever, Result,
};

/// The metadata bridge.
///
/// Exposes a single operation, `get(path, options)`, which settles exactly
/// once: it resolves to a `MediaMetadata` record or rejects with a
/// `BridgeError` carrying the `"ERROR"` code. The retriever is an explicit
/// dependency so tests can substitute their own implementation.
pub struct MetadataBridge {
    retriever: Arc<dyn MetadataRetriever>,
}

impl MetadataBridge {
    /// Create a bridge over the given retriever
    pub fn new(retriever: Arc<dyn MetadataRetriever>) -> Self {
        Self { retriever }
    }

    /// Create a bridge over the lofty-backed retriever
    pub fn with_lofty() -> Self {
        Self::new(Arc::new(LoftyRetriever::new()))
    }

    /// Extract metadata from the file at `path`.
    ///
    /// The actual retriever call is blocking, so it runs on the runtime's
    /// blocking pool. Each invocation is independent: no state is shared or
    /// cached across calls.
    ///
    /// # Errors
    /// Returns a `BridgeError` if the retriever cannot complete the call
    pub async fn get(
        &self,
        path: impl AsRef<Path>,
        options: ExtractOptions,
    ) -> Result<MediaMetadata> {
        let retriever = Arc::clone(&self.retriever);
        let path: PathBuf = path.as_ref().to_path_buf();

        tokio::task::spawn_blocking(move || extract(retriever.as_ref(), &path, options))
            .await
            .map_err(|e| BridgeError::extraction(e.to_string()))?
    }
}

impl Default for MetadataBridge {
    fn default() -> Self {
        Self::with_lofty()
    }
}

fn extract(
    retriever: &dyn MetadataRetriever,
    path: &Path,
    options: ExtractOptions,
) -> Result<MediaMetadata> {
    // The source is dropped on every exit path, releasing whatever the
    // retriever holds open for this call.
    let mut source = retriever.open(path)?;
    let mut metadata = MediaMetadata::new();

    for key in MetadataKey::ALL {
        if let Some(value) = source.metadata_value(key)? {
            metadata.set(key, value);
        }
    }

    if options.get_thumb {
        if let Some(bytes) = source.embedded_picture()? {
            metadata.thumb = Some(STANDARD.encode(bytes));
        }
    }

    tracing::debug!(path = %path.display(), "extracted metadata");
    Ok(metadata)
}
