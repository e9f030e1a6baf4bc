use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;
use crate::pipeline::Detection;

pub const HEADER: &str = "+------ START OF DETECTED CODE ------+";
pub const FOOTER: &str = "+------  END OF DETECTED CODE  ------+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    detection: &'a Detection,
    elapsed_ms: u64,
}

/// Framed line followed by the timing report.
pub fn render_text(line: &str, elapsed: Duration) -> String {
    format!(
        "\n{HEADER}\n\n{line}\n\n{FOOTER}\n\nAll done in {} ms\n",
        elapsed.as_millis()
    )
}

pub fn render_json(detection: &Detection, elapsed: Duration) -> Result<String> {
    let report = JsonReport {
        detection,
        elapsed_ms: elapsed.as_millis() as u64,
    };
    Ok(serde_json::to_string(&report)? + "\n")
}

pub fn render(format: OutputFormat, detection: &Detection, elapsed: Duration) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(&detection.line, elapsed)),
        OutputFormat::Json => render_json(detection, elapsed),
    }
}
