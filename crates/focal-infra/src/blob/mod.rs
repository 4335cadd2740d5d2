//! Blob-store adapters - the Azure client and an in-memory fallback.

mod azure;
mod memory;

pub use azure::{AzureBlobStore, AzureConfig};
pub use memory::InMemoryBlobStore;
