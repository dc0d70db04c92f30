//! colony_count - count blue and red colonies in a culture plate photo
//!
//! Stands in for the upload page: decodes one image, runs the detector,
//! prints the labeled counts, and writes the annotated image.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use colony_counter::{
    export_annotated, load_upload, ColonyDetector, ColonyReport, CounterConfig, DetectorBackend,
    ReportFormat,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Photo of the culture (.jpg, .jpeg or .png).
    image: PathBuf,
    /// Directory for the annotated image (overrides COLONY_OUTPUT_DIR).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Report format (overrides COLONY_REPORT_FORMAT).
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
    /// Skip writing the annotated image.
    #[arg(long)]
    no_annotated: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = CounterConfig::load()?;
    if let Some(out) = args.out {
        cfg.output_dir = out;
    }
    if let Some(format) = args.format {
        cfg.report_format = format;
    }
    if args.no_annotated {
        cfg.write_annotated = false;
    }

    let upload = load_upload(&args.image, cfg.max_upload_bytes)?;

    let detector = ColonyDetector::new();
    let start = Instant::now();
    let result = detector.detect(&upload.frame)?;
    log::info!(
        "{} detector finished in {}ms",
        detector.name(),
        start.elapsed().as_millis()
    );

    let mut report = ColonyReport::new(upload.name.clone(), &result);
    if cfg.write_annotated {
        let stem = args
            .image
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("cannot derive output name from {}", args.image.display()))?;
        let path = export_annotated(&result, &cfg.output_dir, stem)?;
        report = report.with_annotated_path(path);
    }

    println!("{}", report.render(cfg.report_format)?.trim_end());
    Ok(())
}
