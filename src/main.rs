//! ocr-enhance - clean up OCR text and report what changed.
//!
//! Reads recognized text from files (or stdin) and prints the enhancement
//! report as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ocr_enhance::{Enhancer, EnhancerConfig, RawRecognition, Result, classify};

#[derive(Debug, Parser)]
#[command(name = "ocr-enhance", version, about = "Normalize OCR output and score the result")]
struct Cli {
    /// Text files to enhance; stdin is read when none are given
    files: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = "OCR_ENHANCE_CONFIG")]
    config: Option<PathBuf>,

    /// Treat the input as raw OCR output with this engine confidence (0-100)
    #[arg(long)]
    engine_confidence: Option<f64>,

    /// Only print the detected language of each input
    #[arg(long, conflicts_with = "engine_confidence")]
    language_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        return Ok(vec![io::read_to_string(io::stdin())?]);
    }
    let mut texts = Vec::with_capacity(files.len());
    for path in files {
        info!(path = %path.display(), "reading input");
        texts.push(fs::read_to_string(path)?);
    }
    Ok(texts)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ocr_enhance=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EnhancerConfig::load(path)?,
        None => EnhancerConfig::default(),
    }
    .with_env_overrides();
    let enhancer = Enhancer::new(config);

    let texts = read_inputs(&cli.files)?;

    if cli.language_only {
        let mut stdout = io::stdout().lock();
        for text in &texts {
            writeln!(stdout, "{}", classify(text))?;
        }
        return Ok(());
    }

    let mut outputs: Vec<Value> = Vec::with_capacity(texts.len());
    match cli.engine_confidence {
        Some(confidence) => {
            for text in texts {
                let outcome = enhancer.process_recognition(RawRecognition { text, confidence })?;
                outputs.push(serde_json::to_value(outcome)?);
            }
        }
        None => {
            for report in enhancer.run_batch(&texts) {
                outputs.push(serde_json::to_value(report?)?);
            }
        }
    }

    let output = if outputs.len() == 1 {
        outputs.remove(0)
    } else {
        Value::Array(outputs)
    };
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
