use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "colony_out";
const DEFAULT_WRITE_ANNOTATED: bool = true;
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 200 * 1024 * 1024;

/// How `colony_count` prints its report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unknown report format '{}' (expected text or json)", other)),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct CounterConfigFile {
    output: Option<OutputConfigFile>,
    upload: Option<UploadConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
struct OutputConfigFile {
    dir: Option<PathBuf>,
    write_annotated: Option<bool>,
    format: Option<ReportFormat>,
}

#[derive(Debug, Deserialize, Default)]
struct UploadConfigFile {
    max_bytes: Option<u64>,
}

/// Settings for the upload/report layer. Detection thresholds are fixed and
/// not part of this config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    pub output_dir: PathBuf,
    pub write_annotated: bool,
    pub report_format: ReportFormat,
    pub max_upload_bytes: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::from_file(CounterConfigFile::default())
    }
}

impl CounterConfig {
    /// Load from `COLONY_CONFIG` (if set), then apply `COLONY_*` overrides.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("COLONY_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) if !path.trim().is_empty() => Some(read_config_file(Path::new(path))?),
            _ => None,
        };
        let mut cfg = Self::from_file(file_cfg.unwrap_or_default());
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: CounterConfigFile) -> Self {
        let output = file.output.unwrap_or_default();
        Self {
            output_dir: output
                .dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            write_annotated: output.write_annotated.unwrap_or(DEFAULT_WRITE_ANNOTATED),
            report_format: output.format.unwrap_or_default(),
            max_upload_bytes: file
                .upload
                .and_then(|upload| upload.max_bytes)
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var("COLONY_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                self.output_dir = PathBuf::from(dir);
            }
        }
        if let Ok(flag) = std::env::var("COLONY_WRITE_ANNOTATED") {
            self.write_annotated = parse_bool(&flag).ok_or_else(|| {
                anyhow!("COLONY_WRITE_ANNOTATED must be one of 1/0/true/false/yes/no")
            })?;
        }
        if let Ok(format) = std::env::var("COLONY_REPORT_FORMAT") {
            if !format.trim().is_empty() {
                self.report_format = ReportFormat::parse(&format)?;
            }
        }
        if let Ok(max) = std::env::var("COLONY_MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = max
                .trim()
                .parse()
                .map_err(|_| anyhow!("COLONY_MAX_UPLOAD_BYTES must be an integer byte count"))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(anyhow!("max upload size must be greater than zero"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("output directory must not be empty"));
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<CounterConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let cfg = if is_toml {
        toml::from_str(&raw).map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?
    } else {
        serde_json::from_str(&raw)
            .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?
    };
    Ok(cfg)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
