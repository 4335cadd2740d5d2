//! Framing policy - the fixed target boxes an uploaded image is fitted into.
//!
//! This is the one piece of domain-specific policy in the system and its
//! constants are exact: a 50-pixel square tolerance and three feed boxes.

/// Feed box for near-square images.
pub const FEED_SQUARE: (u32, u32) = (1080, 1080);

/// Feed box for images taller than wide.
pub const FEED_PORTRAIT: (u32, u32) = (1080, 1350);

/// Feed box for images wider than tall.
pub const FEED_LANDSCAPE: (u32, u32) = (1080, 566);

/// Width/height difference under which an image counts as square.
pub const SQUARE_TOLERANCE: u32 = 50;

/// Box for profile pictures.
pub const PROFILE_BOX: (u32, u32) = (320, 320);

/// Pick the feed target box for an image of the given dimensions.
pub fn feed_target(width: u32, height: u32) -> (u32, u32) {
    if width.abs_diff(height) < SQUARE_TOLERANCE {
        FEED_SQUARE
    } else if height > width {
        FEED_PORTRAIT
    } else {
        FEED_LANDSCAPE
    }
}

/// Dimensions after fitting `(width, height)` inside `target` preserving
/// aspect ratio. Returns `None` when the image already fits - images are
/// never upsampled.
pub fn fit_within(width: u32, height: u32, target: (u32, u32)) -> Option<(u32, u32)> {
    let (max_w, max_h) = target;
    if width <= max_w && height <= max_h {
        return None;
    }
    let scale = f64::min(max_w as f64 / width as f64, max_h as f64 / height as f64);
    let new_w = ((width as f64 * scale).round() as u32).clamp(1, max_w);
    let new_h = ((height as f64 * scale).round() as u32).clamp(1, max_h);
    Some((new_w, new_h))
}
