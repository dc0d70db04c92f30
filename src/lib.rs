//! Colony Counter
//!
//! Counts and classifies bacterial colonies in a photo of a culture plate by
//! detecting two hue families: blue (and variants) and red (and variants).
//!
//! # Pipeline
//!
//! 1. **Ingest**: decode a `.jpg` / `.jpeg` / `.png` upload to RGB and swap it
//!    into processing (BGR) order.
//! 2. **Detect**: HSV segmentation, 3x3 opening, external contours, area
//!    filter, outline annotation. Pure and deterministic.
//! 3. **Report**: labeled counts as text or JSON, plus the annotated image
//!    swapped back to RGB.
//!
//! This is a best-effort visual heuristic with fixed thresholds. It does not
//! separate touching colonies and is not a validated diagnostic tool.
//!
//! # Module Structure
//!
//! - `frame`: processing-order frames and channel-order conversion
//! - `detect`: the colony detector
//! - `ingest`: upload validation and decoding
//! - `report`: report rendering and annotated export
//! - `config`: settings for the `colony_count` tool

pub mod config;
pub mod detect;
pub mod frame;
pub mod ingest;
pub mod report;

pub use config::{CounterConfig, ReportFormat};
pub use detect::{
    count_colonies, Colony, ColonyClass, ColonyDetector, DetectionResult, DetectorBackend,
};
pub use frame::{BgrFrame, ChannelOrder};
pub use ingest::{decode_upload, load_upload, Upload};
pub use report::{export_annotated, ColonyReport};
