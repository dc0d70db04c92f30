use image::{GenericImage, GrayImage, Rgb, RgbImage};
use imageproc::contours::{find_contours, BorderType};
use imageproc::drawing::draw_line_segment_mut;
use imageproc::point::Point;

/// Contours at or below this enclosed area are treated as degenerate.
///
/// In pixel units this admits every contour that encloses anything at all;
/// it only drops boundaries that collapse to a point or a line.
pub const MIN_CONTOUR_AREA: f64 = 0.0001;

/// Pixel offsets stamped along each segment to get a 2-pixel stroke.
///
/// The stroke covers the boundary pixel plus its right/lower neighbour, so it
/// sits half a pixel off-centre towards +x/+y. An even width has no centred
/// rasterization.
const STROKE_OFFSETS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];

/// Outer boundaries of the top-level foreground regions in `mask`.
///
/// Holes, and anything nested inside a hole, are skipped. The mask is traced
/// inside a one-pixel background frame: the tracer only starts outer borders
/// right of column 0, so regions touching the left edge would otherwise come
/// back as holes.
pub(crate) fn external_contours(mask: &GrayImage) -> Vec<Vec<Point<i32>>> {
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    // The padded canvas is two pixels larger in both directions.
    if padded.copy_from(mask, 1, 1).is_err() {
        return Vec::new();
    }

    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| {
            c.points
                .into_iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect()
        })
        .collect()
}

/// Area enclosed by a closed polyline (shoelace formula).
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
        .sum();
    twice.abs() as f64 / 2.0
}

/// Axis-aligned bounds as `(x, y, width, height)`, inclusive of edge pixels.
pub(crate) fn bounding_box(points: &[Point<i32>]) -> (u32, u32, u32, u32) {
    if points.is_empty() {
        return (0, 0, 0, 0);
    }
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (
        min_x.max(0) as u32,
        min_y.max(0) as u32,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    )
}

/// Draw `points` as a closed outline. Strokes falling off the canvas are clipped.
pub(crate) fn draw_outline(canvas: &mut RgbImage, points: &[Point<i32>], color: Rgb<u8>) {
    if points.is_empty() {
        return;
    }
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        for (dx, dy) in STROKE_OFFSETS {
            draw_line_segment_mut(
                canvas,
                (a.x as f32 + dx, a.y as f32 + dy),
                (b.x as f32 + dx, b.y as f32 + dy),
                color,
            );
        }
    }
}
