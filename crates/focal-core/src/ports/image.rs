//! Image-normalizer port.

/// Normalizes an uploaded image for storage: decode, convert to RGB, fit
/// into the framing policy's target box without upsampling, re-encode as
/// JPEG. Implementations run synchronously and block the calling handler
/// for the duration, matching the original request model.
pub trait ImageNormalizer: Send + Sync {
    /// Normalize for the feed: target box chosen by [`crate::domain::framing::feed_target`].
    fn normalize_feed(&self, data: &[u8]) -> Result<Vec<u8>, ImageError>;

    /// Normalize a profile picture: fixed 320x320 box.
    fn normalize_profile(&self, data: &[u8]) -> Result<Vec<u8>, ImageError>;
}

/// Image-processing errors.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Unreadable image data: {0}")]
    Decode(String),

    #[error("Image encoding failed: {0}")]
    Encode(String),
}
