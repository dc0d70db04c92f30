use anyhow::Result;
use image::Rgb;
use imageproc::point::Point;

use crate::detect::backend::DetectorBackend;
use crate::detect::contour::{
    bounding_box, draw_outline, external_contours, polygon_area, MIN_CONTOUR_AREA,
};
use crate::detect::hsv::{Hsv, HsvRange, BLUE_BANDS, RED_BANDS};
use crate::detect::mask::{band_mask, coverage, open_3x3, to_hsv};
use crate::detect::result::{Colony, ColonyClass, DetectionResult};
use crate::frame::{bgr_pixel, BgrFrame};

/// Hue-band colony detector.
///
/// Segments blue-family and red-family pixels in HSV, cleans each mask with
/// a 3x3 opening, and counts the external contours that enclose a
/// non-degenerate area. Thresholds are fixed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColonyDetector;

impl ColonyDetector {
    pub fn new() -> Self {
        Self
    }
}

impl DetectorBackend for ColonyDetector {
    fn name(&self) -> &'static str {
        "hue-band"
    }

    fn detect(&self, frame: &BgrFrame) -> Result<DetectionResult> {
        let (width, height) = (frame.width(), frame.height());
        let hsv = to_hsv(frame);

        let blue = band_outlines(&hsv, width, height, &BLUE_BANDS, ColonyClass::Blue);
        let red = band_outlines(&hsv, width, height, &RED_BANDS, ColonyClass::Red);

        let mut annotated = frame.clone();
        let mut colonies = Vec::with_capacity(blue.len() + red.len());
        for (class, outlines) in [(ColonyClass::Blue, &blue), (ColonyClass::Red, &red)] {
            let color = outline_color(class);
            for (points, area) in outlines {
                draw_outline(annotated.buffer_mut(), points, color);
                colonies.push(Colony {
                    class,
                    area: *area,
                    bbox: bounding_box(points),
                });
            }
        }

        log::debug!(
            "{}x{} frame: {} blue, {} red colonies",
            width,
            height,
            blue.len(),
            red.len()
        );

        Ok(DetectionResult {
            blue_count: blue.len(),
            red_count: red.len(),
            annotated,
            colonies,
        })
    }
}

type Outline = (Vec<Point<i32>>, f64);

fn band_outlines(
    hsv: &[Hsv],
    width: u32,
    height: u32,
    bands: &[HsvRange],
    class: ColonyClass,
) -> Vec<Outline> {
    let raw = band_mask(hsv, width, height, bands);
    let cleaned = open_3x3(&raw);
    log::debug!(
        "{:?} mask coverage: {:.4} raw, {:.4} after opening",
        class,
        coverage(&raw),
        coverage(&cleaned)
    );

    external_contours(&cleaned)
        .into_iter()
        .map(|points| {
            let area = polygon_area(&points);
            (points, area)
        })
        .filter(|(_, area)| *area > MIN_CONTOUR_AREA)
        .collect()
}

fn outline_color(class: ColonyClass) -> Rgb<u8> {
    match class {
        ColonyClass::Blue => bgr_pixel(255, 0, 0),
        ColonyClass::Red => bgr_pixel(0, 0, 255),
    }
}
