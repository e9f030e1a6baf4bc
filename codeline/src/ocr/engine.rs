use std::time::Duration;

use async_trait::async_trait;
use leptess::{LepTess, Variable};
use tracing::{debug, info};

use super::loader::DecodedImage;
use crate::config::OcrConfig;
use crate::error::{CodelineError, Result};

/// OCR collaborator: turns a decoded image into multi-line UTF-8 text.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image: &DecodedImage) -> Result<String>;
}

/// Tesseract via leptess, fixed to one language and single-column page
/// segmentation. leptess initialises Tesseract with the traineddata's default
/// engine, so LSTM-only recognition needs LSTM-only traineddata.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    config: OcrConfig,
}

fn create_tesseract(config: &OcrConfig) -> Result<LepTess> {
    // leptess has no init-time engine mode; the traineddata's default applies.
    let mut lt = LepTess::new(config.tessdata_path.as_deref(), config.language.trim())
        .map_err(|e| CodelineError::OcrUnavailable(format!("Tesseract not available: {e}")))?;

    lt.set_variable(
        Variable::TesseditPagesegMode,
        &config.page_seg_mode.to_string(),
    )
    .map_err(|e| {
        CodelineError::OcrUnavailable(format!("Failed to set page segmentation mode: {e}"))
    })?;

    Ok(lt)
}

/// One full recognition pass. The Tesseract handle is dropped, and its
/// resources released, on every return path.
fn run_tesseract(config: &OcrConfig, png: &[u8]) -> Result<String> {
    let mut lt = create_tesseract(config)?;

    lt.set_image_from_mem(png)
        .map_err(|e| CodelineError::Ocr(format!("Failed to set image: {e}")))?;
    lt.set_source_resolution(config.dpi);

    lt.get_utf8_text()
        .map_err(|e| CodelineError::Ocr(format!("Failed to extract text: {e}")))
}

/// Run blocking OCR work off the async runtime, bounded by `limit`.
async fn run_blocking_with_timeout<F>(limit: Duration, work: F) -> Result<String>
where
    F: FnOnce() -> Result<String> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(work);

    match tokio::time::timeout(limit, task).await {
        Ok(joined) => joined.map_err(|e| CodelineError::Ocr(format!("OCR task panicked: {e}")))?,
        Err(_) => Err(CodelineError::Ocr(format!(
            "OCR operation timed out after {} ms",
            limit.as_millis()
        ))),
    }
}

impl TesseractEngine {
    /// Validate the configuration. Tesseract itself starts per recognition,
    /// so a missing install surfaces from `recognize` as `OcrUnavailable`.
    pub fn new(config: &OcrConfig) -> Result<Self> {
        config.validate()?;

        info!(
            language = %config.language,
            page_seg_mode = config.page_seg_mode,
            "Tesseract OCR configured"
        );

        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, image: &DecodedImage) -> Result<String> {
        debug!(
            width = image.width(),
            height = image.height(),
            channels = image.channels(),
            stride = image.stride(),
            "Running Tesseract"
        );

        let png = image.to_png()?;
        let config = self.config.clone();
        let limit = Duration::from_secs(self.config.timeout_secs);

        run_blocking_with_timeout(limit, move || run_tesseract(&config, &png)).await
    }
}
