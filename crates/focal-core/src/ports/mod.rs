//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod blob;
mod image;
mod store;

pub use blob::{BlobError, BlobStore};
pub use image::{ImageError, ImageNormalizer};
pub use store::{PostStore, UserStore};
