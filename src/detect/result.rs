use serde::Serialize;

use crate::frame::BgrFrame;

/// Color family a colony was classified into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColonyClass {
    Blue,
    Red,
}

/// One outlined colony.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Colony {
    pub class: ColonyClass,
    /// Area enclosed by the traced boundary, in square pixels.
    pub area: f64,
    /// Bounding box `(x, y, width, height)` in pixels.
    pub bbox: (u32, u32, u32, u32),
}

/// Result of running colony detection on a frame.
#[derive(Clone, Debug)]
pub struct DetectionResult {
    pub blue_count: usize,
    pub red_count: usize,
    /// Copy of the input with colony outlines drawn on it (processing order).
    pub annotated: BgrFrame,
    /// Colonies behind the counts, blue first.
    pub colonies: Vec<Colony>,
}

impl DetectionResult {
    pub fn count(&self, class: ColonyClass) -> usize {
        match class {
            ColonyClass::Blue => self.blue_count,
            ColonyClass::Red => self.red_count,
        }
    }
}
