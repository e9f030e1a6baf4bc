use serde::Deserialize;
use std::env;

use crate::error::{CodelineError, Result};

/// Tesseract page segmentation mode 4: a single column of text of variable sizes.
pub const PSM_SINGLE_COLUMN: u32 = 4;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ocr: OcrConfig,
    pub output: OutputConfig,
}

/// Tesseract settings.
///
/// The recognizer is whatever engine the traineddata selects by default.
/// Point `tessdata_path` at LSTM-only models (`tessdata_best` or
/// `tessdata_fast`, the stock 4.x+ models) for neural-network-only
/// recognition; legacy-plus-LSTM traineddata may combine both engines.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub language: String,
    pub tessdata_path: Option<String>,
    pub page_seg_mode: u32,
    pub dpi: i32,
    pub timeout_secs: u64,
    pub max_image_dimension: u32,
    pub min_image_dimension: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Replace non-alphanumeric characters with spaces before picking the longest line.
    pub filter_alnum: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            tessdata_path: None,
            page_seg_mode: PSM_SINGLE_COLUMN,
            dpi: 300,
            timeout_secs: 60,
            max_image_dimension: 8192,
            min_image_dimension: 8,
        }
    }
}

impl OcrConfig {
    /// Reject settings the fixed recognition mode cannot honour.
    pub fn validate(&self) -> Result<()> {
        let language = self.language.trim();
        if language.is_empty() {
            return Err(CodelineError::Config("OCR language must not be empty".to_string()));
        }
        if language.contains('+') || language.contains(',') {
            return Err(CodelineError::Config(format!(
                "Exactly one OCR language is supported, got '{language}'"
            )));
        }
        if self.page_seg_mode > 13 {
            return Err(CodelineError::Config(format!(
                "Invalid page segmentation mode {}",
                self.page_seg_mode
            )));
        }
        if self.min_image_dimension > self.max_image_dimension {
            return Err(CodelineError::Config(format!(
                "Minimum image dimension {} exceeds maximum {}",
                self.min_image_dimension, self.max_image_dimension
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let ocr_defaults = OcrConfig::default();
        Self {
            ocr: OcrConfig {
                language: env::var("OCR_LANGUAGE").unwrap_or(ocr_defaults.language),
                tessdata_path: env::var("OCR_TESSDATA_PATH").ok(),
                page_seg_mode: parse_env_or("OCR_PAGE_SEG_MODE", ocr_defaults.page_seg_mode),
                dpi: parse_env_or("OCR_DPI", ocr_defaults.dpi),
                timeout_secs: parse_env_or("OCR_TIMEOUT", ocr_defaults.timeout_secs),
                max_image_dimension: parse_env_or(
                    "OCR_MAX_DIMENSION",
                    ocr_defaults.max_image_dimension,
                ),
                min_image_dimension: parse_env_or(
                    "OCR_MIN_DIMENSION",
                    ocr_defaults.min_image_dimension,
                ),
            },
            output: OutputConfig {
                filter_alnum: parse_env_or("CODELINE_FILTER_ALNUM", true),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
