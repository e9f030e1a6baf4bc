//! OCR collaborators.
//!
//! Both boundaries are narrow traits so the pipeline can run against stubs:
//! - `ImageLoader` decodes a file into an RGB pixel buffer (`FileImageLoader`
//!   uses the `image` crate)
//! - `OcrEngine` recognizes text in that buffer (`TesseractEngine` uses
//!   leptess with single-column segmentation and the LSTM recognizer)
//!
//! Settings come from `OcrConfig` (see `config.rs`).

mod engine;
mod loader;

pub use engine::{OcrEngine, TesseractEngine};
pub use loader::{DecodedImage, FileImageLoader, ImageLoader};
