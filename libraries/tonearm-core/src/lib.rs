//! Tonearm Core
//!
//! Platform-agnostic types, traits, and error handling for the Tonearm
//! metadata bridge.
//!
//! This crate defines:
//! - **Domain Types**: `MediaMetadata`, `ExtractOptions`, `MetadataKey`
//! - **Core Traits**: `MetadataRetriever`, `RetrieverSource`
//! - **Error Handling**: Unified `BridgeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::{ExtractOptions, MediaMetadata, MetadataKey};
//!
//! let mut metadata = MediaMetadata::new();
//! metadata.set(MetadataKey::Title, "Song A".to_string());
//!
//! assert_eq!(metadata.title.as_deref(), Some("Song A"));
//! assert_eq!(metadata.value(MetadataKey::Artist), None);
//!
//! let options = ExtractOptions::default();
//! assert!(!options.get_thumb);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod keys;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{BridgeError, Result, ERROR_CODE};
pub use keys::MetadataKey;
pub use traits::{MetadataRetriever, RetrieverSource};
pub use types::{ExtractOptions, MediaMetadata};
