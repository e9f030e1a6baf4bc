use serde::Serialize;
use tracing::debug;

use super::{filter_alnum, select_longest, split_lines};
use crate::error::Result;

/// Longest line picked out of a block of recognized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSelection {
    pub line: String,
    pub line_count: usize,
}

/// Split, optionally filter, then select the longest line.
#[derive(Debug, Clone, Copy)]
pub struct LineExtractor {
    filter: bool,
}

impl LineExtractor {
    pub fn new(filter: bool) -> Self {
        Self { filter }
    }

    pub fn filters(&self) -> bool {
        self.filter
    }

    pub fn extract(&self, raw: &str) -> Result<LineSelection> {
        let lines = split_lines(raw);
        let line_count = lines.len();
        debug!(line_count, filter = self.filter, "Selecting longest line");

        let line = if self.filter {
            let filtered: Vec<String> = lines.iter().map(|line| filter_alnum(line)).collect();
            select_longest(&filtered)?
        } else {
            select_longest(&lines)?
        };

        Ok(LineSelection { line, line_count })
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}
