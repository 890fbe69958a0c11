//! Pixel buffer for captured images
//!
//! [`Bitmap`] wraps `image::RgbaImage` and owns the pixels of exactly one
//! capture. Every capture call produces a fresh `Bitmap`; nothing is cached
//! or reused. Consumption is up to the caller: inspect the pixels in memory
//! or persist them with [`Bitmap::save`].

use std::path::Path;

use image::RgbaImage;

use crate::error::{CaptureError, CaptureResult};

/// In-memory pixel buffer produced by a capture
///
/// Pixels are RGBA, 8 bits per channel, row-major from the top-left corner.
#[derive(Clone, Debug)]
pub struct Bitmap {
    inner: RgbaImage,
}

impl Bitmap {
    /// Creates a bitmap from an existing RGBA image
    pub fn new(image: RgbaImage) -> Self {
        Self { inner: image }
    }

    /// Builds a bitmap from top-down BGRA rows as produced by GDI readback
    ///
    /// `row_pitch` is the stride of one source row in bytes; it may exceed
    /// `width * 4` when the source buffer is padded. Channels are swapped to
    /// RGBA during the copy.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Image`] when `data` is too short for the
    /// claimed dimensions.
    pub fn from_bgra(width: u32, height: u32, row_pitch: usize, data: &[u8]) -> CaptureResult<Self> {
        let needed = row_pitch
            .checked_mul(height as usize)
            .ok_or_else(|| CaptureError::Image("pixel buffer size overflow".to_string()))?;
        if data.len() < needed || row_pitch < width as usize * 4 {
            return Err(CaptureError::Image(format!(
                "pixel buffer too short: {} bytes for {}x{} at pitch {}",
                data.len(),
                width,
                height,
                row_pitch
            )));
        }

        let mut image = RgbaImage::new(width, height);
        for y in 0..height {
            let row = &data[y as usize * row_pitch..];
            for x in 0..width {
                let offset = x as usize * 4;
                let b = row[offset];
                let g = row[offset + 1];
                let r = row[offset + 2];
                let a = row[offset + 3];
                image.put_pixel(x, y, image::Rgba([r, g, b, a]));
            }
        }

        Ok(Self::new(image))
    }

    /// Generates a synthetic gradient image, used by the mock provider
    pub fn from_test_pattern(width: u32, height: u32) -> Self {
        let image = RgbaImage::from_fn(width, height, |x, y| {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            image::Rgba([r, g, 0x40, 0xff])
        });
        Self::new(image)
    }

    /// Returns (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Borrows the underlying RGBA image
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.inner
    }

    /// Consumes the bitmap, yielding the underlying RGBA image
    pub fn into_rgba(self) -> RgbaImage {
        self.inner
    }

    /// Writes the bitmap to disk; the format is inferred from the extension
    ///
    /// # Errors
    ///
    /// - [`CaptureError::Io`] - the file could not be written
    /// - [`CaptureError::Image`] - the encoder rejected the image
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CaptureResult<()> {
        let path = path.as_ref();
        tracing::debug!("Saving {}x{} capture to {}", self.width(), self.height(), path.display());
        self.inner.save(path).map_err(|e| match e {
            image::ImageError::IoError(io) => CaptureError::Io(io),
            other => CaptureError::Image(other.to_string()),
        })
    }
}
