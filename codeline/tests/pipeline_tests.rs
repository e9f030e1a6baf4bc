use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use codeline::config::OcrConfig;
use codeline::ocr::{DecodedImage, FileImageLoader, OcrEngine};
use codeline::pipeline::DetectionPipeline;
use codeline::processing::LineExtractor;
use codeline::{CodelineError, Result};
use pretty_assertions::assert_eq;

mod common;
use common::write_blank_png;

/// Returns canned text and records the buffer geometry it was handed.
struct CannedEngine {
    text: &'static str,
    expected_size: (u32, u32),
}

#[async_trait]
impl OcrEngine for CannedEngine {
    async fn recognize(&self, image: &DecodedImage) -> Result<String> {
        assert_eq!((image.width(), image.height()), self.expected_size);
        assert_eq!(image.channels(), 3);
        assert_eq!(image.stride(), image.width() as usize * 3);
        Ok(self.text.to_string())
    }
}

struct BrokenEngine;

#[async_trait]
impl OcrEngine for BrokenEngine {
    async fn recognize(&self, _image: &DecodedImage) -> Result<String> {
        Err(CodelineError::OcrUnavailable(
            "Tesseract not available: eng.traineddata missing".to_string(),
        ))
    }
}

fn loader() -> Arc<FileImageLoader> {
    Arc::new(FileImageLoader::new(&OcrConfig::default()))
}

#[tokio::test]
async fn test_detects_longest_line_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_blank_png(dir.path(), "tin_001.png", 64, 32);

    let pipeline = DetectionPipeline::new(
        loader(),
        Arc::new(CannedEngine {
            text: "LOT 7\nTIN-0042-881-X\n\nexp 09/27\n",
            expected_size: (64, 32),
        }),
        LineExtractor::new(true),
    );

    let detection = pipeline.detect(&path).await.unwrap();
    assert_eq!(detection.line, "TIN 0042 881 X");
    assert_eq!(detection.line_count, 3);
    assert!(detection.filtered);
}

#[tokio::test]
async fn test_missing_image_is_image_load_error() {
    let pipeline = DetectionPipeline::new(
        loader(),
        Arc::new(CannedEngine {
            text: "unused",
            expected_size: (0, 0),
        }),
        LineExtractor::default(),
    );

    let err = pipeline
        .detect(Path::new("/no/such/image.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, CodelineError::ImageLoad(_)));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_unreadable_image_is_image_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.png");
    std::fs::write(&path, b"this is not an image").unwrap();

    let pipeline = DetectionPipeline::new(loader(), Arc::new(BrokenEngine), LineExtractor::default());

    let err = pipeline.detect(&path).await.unwrap_err();
    assert!(matches!(err, CodelineError::ImageLoad(_)));
}

#[tokio::test]
async fn test_engine_failure_is_propagated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_blank_png(dir.path(), "blank.png", 32, 32);

    let pipeline = DetectionPipeline::new(loader(), Arc::new(BrokenEngine), LineExtractor::default());

    let err = pipeline.detect(&path).await.unwrap_err();
    assert!(matches!(err, CodelineError::OcrUnavailable(_)));
    assert_eq!(err.exit_code(), 4);
}

#[tokio::test]
async fn test_empty_recognition_is_no_text_detected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_blank_png(dir.path(), "blank.png", 32, 32);

    let pipeline = DetectionPipeline::new(
        loader(),
        Arc::new(CannedEngine {
            text: "\n\n",
            expected_size: (32, 32),
        }),
        LineExtractor::default(),
    );

    let err = pipeline.detect(&path).await.unwrap_err();
    assert!(matches!(err, CodelineError::NoTextDetected));
    assert_eq!(err.exit_code(), 5);
}
