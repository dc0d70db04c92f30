use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::morphology;

use super::hsv::{Hsv, HsvRange};
use crate::frame::BgrFrame;

pub(crate) const FOREGROUND: u8 = 255;

/// Binary mask of pixels falling inside any of `bands`.
///
/// Each band is tested independently and the results are added with
/// saturation, which for 0/255 masks is a plain OR.
pub(crate) fn band_mask(hsv: &[Hsv], width: u32, height: u32, bands: &[HsvRange]) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let px = hsv[(y * width + x) as usize];
        let hit = bands
            .iter()
            .map(|band| if band.contains(px) { FOREGROUND } else { 0 })
            .fold(0u8, u8::saturating_add);
        Luma([hit])
    })
}

/// HSV view of the whole frame, row-major.
pub(crate) fn to_hsv(frame: &BgrFrame) -> Vec<Hsv> {
    frame
        .buffer()
        .pixels()
        .map(|px| Hsv::from_bgr(px.0))
        .collect()
}

/// Opening with a 3x3 all-ones element: drops specks thinner than 3 pixels.
pub(crate) fn open_3x3(mask: &GrayImage) -> GrayImage {
    morphology::open(mask, Norm::LInf, 1)
}

/// Fraction of foreground pixels, for logging.
pub(crate) fn coverage(mask: &GrayImage) -> f64 {
    let total = mask.as_raw().len();
    if total == 0 {
        return 0.0;
    }
    let on = mask.as_raw().iter().filter(|&&p| p != 0).count();
    on as f64 / total as f64
}
