use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

/// Write a blank RGB PNG of the given size into `dir` and return its path.
pub fn write_blank_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = DynamicImage::new_rgb8(width, height);
    let mut output = Vec::new();
    img.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .expect("Failed to encode PNG fixture");

    let path = dir.join(name);
    std::fs::write(&path, output).expect("Failed to write PNG fixture");
    path
}
