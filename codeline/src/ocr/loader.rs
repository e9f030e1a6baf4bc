use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbImage};
use tracing::debug;

use crate::config::OcrConfig;
use crate::error::{CodelineError, Result};

/// Interleaved 8-bit pixel buffer handed to the OCR engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    channels: u8,
    stride: usize,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Wrap a raw buffer, checking that `stride` and `pixels` cover every row.
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        stride: usize,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        if !matches!(channels, 1 | 3 | 4) {
            return Err(CodelineError::ImageLoad(format!(
                "Unsupported channel count: {channels}"
            )));
        }
        let overflow = || {
            CodelineError::ImageLoad(format!(
                "Buffer size for {width}x{height} with stride {stride} overflows"
            ))
        };
        let row_bytes = (width as usize)
            .checked_mul(channels as usize)
            .ok_or_else(overflow)?;
        if stride < row_bytes {
            return Err(CodelineError::ImageLoad(format!(
                "Row stride {stride} is shorter than a row of {row_bytes} bytes"
            )));
        }
        let needed = if height == 0 {
            0
        } else {
            stride
                .checked_mul(height as usize - 1)
                .and_then(|rows| rows.checked_add(row_bytes))
                .ok_or_else(overflow)?
        };
        if pixels.len() < needed {
            return Err(CodelineError::ImageLoad(format!(
                "Pixel buffer holds {} bytes, {width}x{height} needs {needed}",
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            channels,
            stride,
            pixels,
        })
    }

    pub fn from_rgb(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: 3,
            stride: width as usize * 3,
            pixels: img.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Encode as lossless PNG, dropping any row padding.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let row_bytes = self.width as usize * self.channels as usize;
        let mut packed = Vec::with_capacity(row_bytes * self.height as usize);
        for row in 0..self.height as usize {
            let start = row * self.stride;
            packed.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }

        let img = match self.channels {
            1 => image::GrayImage::from_raw(self.width, self.height, packed)
                .map(DynamicImage::ImageLuma8),
            3 => RgbImage::from_raw(self.width, self.height, packed).map(DynamicImage::ImageRgb8),
            _ => image::RgbaImage::from_raw(self.width, self.height, packed)
                .map(DynamicImage::ImageRgba8),
        }
        .ok_or_else(|| {
            CodelineError::ImageLoad("Pixel buffer does not match dimensions".to_string())
        })?;

        let mut output = Vec::new();
        img.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
            .map_err(|e| CodelineError::ImageLoad(format!("Failed to encode image: {e}")))?;
        Ok(output)
    }
}

/// Image-loading collaborator: turns a path into a decoded pixel buffer.
pub trait ImageLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<DecodedImage>;
}

/// Loads images from disk with the `image` crate, as 3-channel RGB.
#[derive(Debug, Clone)]
pub struct FileImageLoader {
    min_dimension: u32,
    max_dimension: u32,
}

impl FileImageLoader {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            min_dimension: config.min_image_dimension,
            max_dimension: config.max_image_dimension,
        }
    }

    /// Decode in-memory image bytes (PNG, JPEG, ...), guessing the format.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedImage> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| CodelineError::ImageLoad(format!("Failed to read image: {e}")))?;

        let img = reader
            .decode()
            .map_err(|e| CodelineError::ImageLoad(format!("Failed to decode image: {e}")))?;

        let (width, height) = img.dimensions();
        if width < self.min_dimension || height < self.min_dimension {
            return Err(CodelineError::ImageLoad(format!(
                "Image too small: {}x{}, minimum {}x{}",
                width, height, self.min_dimension, self.min_dimension
            )));
        }
        if width > self.max_dimension || height > self.max_dimension {
            return Err(CodelineError::ImageLoad(format!(
                "Image too large: {}x{}, maximum {}x{}",
                width, height, self.max_dimension, self.max_dimension
            )));
        }

        Ok(DecodedImage::from_rgb(img.to_rgb8()))
    }
}

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage> {
        if !path.exists() {
            return Err(CodelineError::ImageLoad(format!(
                "Image file not found: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(CodelineError::ImageLoad(format!(
                "Not a file: {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            CodelineError::ImageLoad(format!("Failed to read {}: {e}", path.display()))
        })?;
        let image = self.decode(&bytes)?;
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Image decoded"
        );
        Ok(image)
    }
}
