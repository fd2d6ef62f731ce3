//! Tonearm Extract
//!
//! Metadata extraction bridge for Tonearm.
//!
//! This crate provides:
//! - `MetadataBridge`: the asynchronous `get(path, options)` entry point
//! - `LoftyRetriever`: a retriever backed by the lofty library
//! - The mapping from semantic metadata keys to lofty item keys
//!
//! The bridge does no container parsing of its own; the retriever is an
//! external collaborator and the bridge only forwards to it and reshapes its
//! output into a fixed-shape record.
//!
//! # Example
//!
//! ```rust,no_run
//! use tonearm_core::ExtractOptions;
//! use tonearm_extract::MetadataBridge;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bridge = MetadataBridge::default();
//! let options = ExtractOptions { get_thumb: true };
//!
//! let metadata = bridge.get("/music/song.mp3", options).await?;
//! if let Some(title) = &metadata.title {
//!     println!("Title: {title}");
//! }
//! # Ok(())
//! # }
//! ```

mod bridge;
mod error;
mod retriever;

pub use bridge::MetadataBridge;
pub use error::{RetrieverError, Result};
pub use retriever::LoftyRetriever;
