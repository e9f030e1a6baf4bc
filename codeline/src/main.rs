use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codeline::config::Config;
use codeline::error::Result;
use codeline::ocr::{FileImageLoader, TesseractEngine};
use codeline::pipeline::{Detection, DetectionPipeline};
use codeline::processing::LineExtractor;
use codeline::report::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "codeline")]
#[command(about = "Print the longest line of text detected in an image")]
struct Args {
    /// Path to the input image
    image: PathBuf,

    /// Keep punctuation instead of blanking non-alphanumeric characters
    #[arg(long)]
    no_filter: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Recognition language (overrides OCR_LANGUAGE)
    #[arg(long)]
    lang: Option<String>,
}

async fn run(args: &Args, config: &Config) -> Result<Detection> {
    let engine = TesseractEngine::new(&config.ocr)?;
    let pipeline = DetectionPipeline::new(
        Arc::new(FileImageLoader::new(&config.ocr)),
        Arc::new(engine),
        LineExtractor::new(config.output.filter_alnum),
    );

    pipeline.detect(&args.image).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let started = Instant::now();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codeline=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(lang) = &args.lang {
        config.ocr.language = lang.clone();
    }
    if args.no_filter {
        config.output.filter_alnum = false;
    }

    let detection = match run(&args, &config).await {
        Ok(detection) => detection,
        Err(e) => {
            tracing::debug!(exit_code = e.exit_code(), "Detection failed");
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    let output = report::render(args.format, &detection, started.elapsed())?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
