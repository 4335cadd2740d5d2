//! # Focal Infrastructure
//!
//! Concrete implementations of the ports defined in `focal-core`:
//! JSON flat-file record stores, blob-store clients, and the image
//! normalizer.

pub mod blob;
pub mod image;
pub mod store;

pub use blob::{AzureBlobStore, AzureConfig, InMemoryBlobStore};
pub use image::JpegNormalizer;
pub use store::{JsonPostStore, JsonUserStore};
