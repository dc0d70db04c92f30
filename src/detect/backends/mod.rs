pub mod hue_band;

pub use hue_band::ColonyDetector;
