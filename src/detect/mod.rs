//! Colony detection.
//!
//! A single pass per frame: HSV segmentation into blue and red masks,
//! 3x3 morphological opening, external contour tracing, degenerate-area
//! filtering, and outline annotation.

mod backend;
mod backends;
mod contour;
mod hsv;
mod mask;
mod result;

pub use backend::DetectorBackend;
pub use backends::ColonyDetector;
pub use contour::{polygon_area, MIN_CONTOUR_AREA};
pub use hsv::{Hsv, HsvRange, BLUE_BANDS, RED_BANDS};
pub use result::{Colony, ColonyClass, DetectionResult};

use anyhow::Result;

use crate::frame::BgrFrame;

/// Count blue and red colonies in `frame` with the default detector.
pub fn count_colonies(frame: &BgrFrame) -> Result<DetectionResult> {
    ColonyDetector::new().detect(frame)
}
