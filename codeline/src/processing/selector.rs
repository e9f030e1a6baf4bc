use crate::error::{CodelineError, Result};

/// Return the longest line, keeping the first one when lengths tie.
///
/// Length is measured in bytes. Fails with [`CodelineError::EmptyInput`]
/// when there is nothing to choose from.
pub fn select_longest<S: AsRef<str>>(lines: &[S]) -> Result<String> {
    let (first, rest) = lines.split_first().ok_or(CodelineError::EmptyInput)?;

    let mut best = first.as_ref();
    for line in rest {
        let line = line.as_ref();
        if line.len() > best.len() {
            best = line;
        }
    }

    Ok(best.to_string())
}
