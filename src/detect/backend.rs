use anyhow::Result;

use crate::detect::result::DetectionResult;
use crate::frame::BgrFrame;

/// Colony detector backend.
///
/// Backends are stateless between calls: the same frame must always produce
/// the same counts and the same annotated image. The input frame is never
/// modified; annotations go onto a copy.
pub trait DetectorBackend: Send {
    /// Backend identifier.
    fn name(&self) -> &'static str;

    /// Count and outline colonies in a processing-order frame.
    fn detect(&self, frame: &BgrFrame) -> Result<DetectionResult>;
}
