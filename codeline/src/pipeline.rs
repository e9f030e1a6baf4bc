use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{CodelineError, Result};
use crate::ocr::{ImageLoader, OcrEngine};
use crate::processing::{has_content, LineExtractor};

/// Outcome of running one image through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub line: String,
    pub filtered: bool,
    pub line_count: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Image → OCR text → longest line.
pub struct DetectionPipeline {
    loader: Arc<dyn ImageLoader>,
    engine: Arc<dyn OcrEngine>,
    extractor: LineExtractor,
}

impl DetectionPipeline {
    pub fn new(
        loader: Arc<dyn ImageLoader>,
        engine: Arc<dyn OcrEngine>,
        extractor: LineExtractor,
    ) -> Self {
        Self {
            loader,
            engine,
            extractor,
        }
    }

    pub async fn detect(&self, path: &Path) -> Result<Detection> {
        let start = Instant::now();

        let image = self.loader.load(path)?;
        let text = self.engine.recognize(&image).await?;

        if !has_content(&text) {
            warn!(path = %path.display(), "OCR returned no text");
            return Err(CodelineError::NoTextDetected);
        }

        let selection = self.extractor.extract(&text)?;
        let elapsed = start.elapsed();
        info!(
            line_count = selection.line_count,
            longest = selection.line.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Detection finished"
        );

        Ok(Detection {
            line: selection.line,
            filtered: self.extractor.filters(),
            line_count: selection.line_count,
            elapsed,
        })
    }
}
