use anyhow::{anyhow, Context, Result};
use image::RgbImage;
use std::path::Path;

use crate::frame::BgrFrame;

/// File extensions accepted for upload (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A decoded upload.
#[derive(Clone, Debug)]
pub struct Upload {
    /// Display name (file name, or `"upload"` for in-memory bytes).
    pub name: String,
    /// Decoded image in interchange (RGB) order.
    pub original: RgbImage,
    /// Same pixels in processing (BGR) order.
    pub frame: BgrFrame,
}

impl Upload {
    pub fn width(&self) -> u32 {
        self.original.width()
    }

    pub fn height(&self) -> u32 {
        self.original.height()
    }
}

/// Read and decode an uploaded image file.
pub fn load_upload(path: &Path, max_bytes: u64) -> Result<Upload> {
    check_extension(path)?;

    let len = std::fs::metadata(path)
        .with_context(|| format!("reading upload {}", path.display()))?
        .len();
    check_size(len, max_bytes)?;

    let bytes =
        std::fs::read(path).with_context(|| format!("reading upload {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    decode_named(&bytes, name).with_context(|| format!("decoding upload {}", path.display()))
}

/// Decode an upload held in memory. The format is sniffed from the bytes.
pub fn decode_upload(bytes: &[u8], max_bytes: u64) -> Result<Upload> {
    check_size(bytes.len() as u64, max_bytes)?;
    decode_named(bytes, "upload".to_string())
}

fn decode_named(bytes: &[u8], name: String) -> Result<Upload> {
    let image = image::load_from_memory(bytes).context("decode image")?;
    let original = image.into_rgb8();
    let frame = BgrFrame::from_rgb(&original)?;
    log::info!(
        "upload {}: decoded {}x{}",
        name,
        original.width(),
        original.height()
    );
    Ok(Upload {
        name,
        original,
        frame,
    })
}

fn check_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| anyhow!("upload {} has no file extension", path.display()))?;
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(anyhow!(
            "unsupported upload type '.{}' (expected one of: {})",
            ext,
            SUPPORTED_EXTENSIONS.join(", ")
        ));
    }
    Ok(())
}

fn check_size(len: u64, max_bytes: u64) -> Result<()> {
    if len == 0 {
        return Err(anyhow!("upload is empty"));
    }
    if len > max_bytes {
        return Err(anyhow!(
            "upload is {} bytes, limit is {} bytes",
            len,
            max_bytes
        ));
    }
    Ok(())
}
