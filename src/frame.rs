//! Processing-order frames.
//!
//! Uploads arrive in interchange order (RGB, as decoded by `image`). The
//! detector works in processing order (BGR). `BgrFrame` is the only type the
//! detector accepts, so a frame can't reach it without going through the
//! channel swap below.
//!
//! - `ChannelOrder`: which of the two orderings a raw buffer is in.
//! - `BgrFrame`: owned 3-channel 8-bit image in BGR order.

use anyhow::{anyhow, Result};
use image::{Rgb, RgbImage};

/// Channel ordering of a raw interleaved 8-bit buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Interchange order used by decoders and display.
    Rgb,
    /// Processing order used by the detector.
    Bgr,
}

// ----------------------------------------------------------------------------
// BgrFrame: processing-order image
// ----------------------------------------------------------------------------

/// Owned image in blue, green, red channel order.
///
/// Storage is an `image::ImageBuffer` so the `imageproc` drawing routines can
/// paint on it directly. The `Rgb` pixel type is only the container here:
/// channel 0 is blue and channel 2 is red.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgrFrame {
    buffer: RgbImage,
}

impl BgrFrame {
    /// Build a frame from a raw interleaved buffer in the given order.
    ///
    /// The buffer must be non-empty and exactly `width * height * 3` bytes.
    pub fn from_raw(pixels: &[u8], width: u32, height: u32, order: ChannelOrder) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(anyhow!("frame dimensions must be non-zero, got {width}x{height}"));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| anyhow!("frame dimensions overflow"))? as usize;
        if pixels.len() != expected {
            return Err(anyhow!(
                "frame length mismatch: expected {}, got {}",
                expected,
                pixels.len()
            ));
        }

        let mut data = pixels.to_vec();
        if order == ChannelOrder::Rgb {
            swap_red_blue(&mut data);
        }
        let buffer = RgbImage::from_raw(width, height, data)
            .ok_or_else(|| anyhow!("frame buffer does not fit {width}x{height}"))?;
        Ok(Self { buffer })
    }

    /// Convert an interchange (RGB) image into processing order.
    pub fn from_rgb(image: &RgbImage) -> Result<Self> {
        Self::from_raw(image.as_raw(), image.width(), image.height(), ChannelOrder::Rgb)
    }

    /// Convert back to interchange (RGB) order for display or export.
    pub fn to_rgb(&self) -> RgbImage {
        let mut rgb = self.buffer.clone();
        swap_red_blue(&mut rgb);
        rgb
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// `[blue, green, red]` at `(x, y)`. Panics when out of bounds.
    pub fn bgr(&self, x: u32, y: u32) -> [u8; 3] {
        self.buffer.get_pixel(x, y).0
    }

    /// Raw interleaved BGR bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    pub(crate) fn buffer(&self) -> &RgbImage {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut RgbImage {
        &mut self.buffer
    }
}

/// Processing-order pixel literal, for drawing on a `BgrFrame`.
pub(crate) fn bgr_pixel(blue: u8, green: u8, red: u8) -> Rgb<u8> {
    Rgb([blue, green, red])
}

fn swap_red_blue(data: &mut [u8]) {
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
