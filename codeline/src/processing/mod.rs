//! Post-processing of recognized text: line splitting, alphanumeric
//! filtering and longest-line selection.

mod extractor;
mod filter;
mod selector;
mod splitter;

pub use extractor::{LineExtractor, LineSelection};
pub use filter::filter_alnum;
pub use selector::select_longest;
pub use splitter::{has_content, split_lines, LINE_DELIMITER};
