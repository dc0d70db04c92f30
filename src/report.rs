//! Result rendering and annotated-image export.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::ReportFormat;
use crate::detect::{Colony, DetectionResult};

pub const BLUE_LABEL: &str = "Blue colonies (and variants)";
pub const RED_LABEL: &str = "Red colonies (and variants)";

/// Shown under every text report.
pub const LIGHTING_NOTE: &str =
    "Note: use well-lit, in-focus photos with good contrast between colonies and background.";

/// Summary of one detection run.
#[derive(Clone, Debug, Serialize)]
pub struct ColonyReport {
    pub source: String,
    pub width: u32,
    pub height: u32,
    pub blue_colonies: usize,
    pub red_colonies: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotated_path: Option<PathBuf>,
    pub colonies: Vec<Colony>,
}

impl ColonyReport {
    pub fn new(source: impl Into<String>, result: &DetectionResult) -> Self {
        Self {
            source: source.into(),
            width: result.annotated.width(),
            height: result.annotated.height(),
            blue_colonies: result.blue_count,
            red_colonies: result.red_count,
            annotated_path: None,
            colonies: result.colonies.clone(),
        }
    }

    pub fn with_annotated_path(mut self, path: PathBuf) -> Self {
        self.annotated_path = Some(path);
        self
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => self.render_text().context("formatting colony report"),
            ReportFormat::Json => {
                serde_json::to_string_pretty(self).context("serializing colony report")
            }
        }
    }

    fn render_text(&self) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(out, "Colony count for {} ({}x{})", self.source, self.width, self.height)?;
        writeln!(out, "  {}: {}", BLUE_LABEL, self.blue_colonies)?;
        writeln!(out, "  {}: {}", RED_LABEL, self.red_colonies)?;
        if let Some(path) = &self.annotated_path {
            writeln!(out, "  annotated image: {}", path.display())?;
        }
        writeln!(out, "{}", LIGHTING_NOTE)?;
        Ok(out)
    }
}

/// Write the annotated frame as `<dir>/<stem>_annotated.png` in RGB order.
pub fn export_annotated(result: &DetectionResult, dir: &Path, stem: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    let path = dir.join(format!("{stem}_annotated.png"));
    result
        .annotated
        .to_rgb()
        .save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("writing annotated image to {}", path.display()))?;
    log::info!("annotated image written to {}", path.display());
    Ok(path)
}
