/// Line delimiter used by Tesseract's UTF-8 output.
pub const LINE_DELIMITER: char = '\n';

/// Split raw OCR text into its non-empty lines, top to bottom.
///
/// Runs of consecutive delimiters (including leading and trailing ones)
/// produce no empty entries, so `"\n\n\n"` and `""` both yield nothing.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(LINE_DELIMITER)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Whether `text` contains anything besides line delimiters.
pub fn has_content(text: &str) -> bool {
    text.chars().any(|c| c != LINE_DELIMITER)
}
