//! Image normalizer built on the `image` crate.

use std::io::Cursor;

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use focal_core::domain::framing::{self, PROFILE_BOX};
use focal_core::ports::{ImageError, ImageNormalizer};

const JPEG_QUALITY: u8 = 90;

/// Decodes an upload of arbitrary format, converts to RGB, fits it into the
/// framing policy's target box (downsample only), and re-encodes as JPEG at
/// quality 90.
pub struct JpegNormalizer;

impl JpegNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn normalize<F>(&self, data: &[u8], target: F) -> Result<Vec<u8>, ImageError>
    where
        F: Fn(u32, u32) -> (u32, u32),
    {
        let decoded =
            image::load_from_memory(data).map_err(|e| ImageError::Decode(e.to_string()))?;
        let rgb: RgbImage = decoded.to_rgb8();

        let (width, height) = rgb.dimensions();
        let rgb = match framing::fit_within(width, height, target(width, height)) {
            Some((new_w, new_h)) => {
                image::imageops::resize(&rgb, new_w, new_h, FilterType::Lanczos3)
            }
            None => rgb,
        };

        let mut out = Cursor::new(Vec::new());
        rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY))
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }
}

impl Default for JpegNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageNormalizer for JpegNormalizer {
    fn normalize_feed(&self, data: &[u8]) -> Result<Vec<u8>, ImageError> {
        self.normalize(data, framing::feed_target)
    }

    fn normalize_profile(&self, data: &[u8]) -> Result<Vec<u8>, ImageError> {
        self.normalize(data, |_, _| PROFILE_BOX)
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, ImageFormat};

    use super::*;

    fn png_of(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 40, 200]),
        ));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn dimensions_of(jpeg: &[u8]) -> (u32, u32) {
        assert_eq!(image::guess_format(jpeg).unwrap(), ImageFormat::Jpeg);
        image::load_from_memory(jpeg).unwrap().dimensions()
    }

    #[test]
    fn test_square_input_fits_square_box() {
        let normalizer = JpegNormalizer::new();
        let out = normalizer.normalize_feed(&png_of(2000, 2000)).unwrap();
        assert_eq!(dimensions_of(&out), (1080, 1080));
    }

    #[test]
    fn test_landscape_input_fits_landscape_box() {
        let normalizer = JpegNormalizer::new();
        let out = normalizer.normalize_feed(&png_of(2000, 1000)).unwrap();
        let (w, h) = dimensions_of(&out);
        assert!(w <= 1080 && h <= 566, "got {w}x{h}");
    }

    #[test]
    fn test_portrait_input_fits_portrait_box() {
        let normalizer = JpegNormalizer::new();
        let out = normalizer.normalize_feed(&png_of(1000, 2000)).unwrap();
        let (w, h) = dimensions_of(&out);
        assert!(w <= 1080 && h <= 1350, "got {w}x{h}");
    }

    #[test]
    fn test_small_input_is_not_upsampled() {
        let normalizer = JpegNormalizer::new();
        let out = normalizer.normalize_feed(&png_of(500, 400)).unwrap();
        assert_eq!(dimensions_of(&out), (500, 400));
    }

    #[test]
    fn test_profile_box_is_320() {
        let normalizer = JpegNormalizer::new();
        let out = normalizer.normalize_profile(&png_of(1000, 500)).unwrap();
        assert_eq!(dimensions_of(&out), (320, 160));
    }

    #[test]
    fn test_garbage_bytes_are_a_decode_error() {
        let normalizer = JpegNormalizer::new();
        let err = normalizer.normalize_feed(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }
}
