pub mod config;
pub mod error;
pub mod ocr;
pub mod pipeline;
pub mod processing;
pub mod report;

pub use error::{CodelineError, Result};
