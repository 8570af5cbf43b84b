//! Command-line deck generator.
//!
//! Reads a slide-content JSON file (or falls back to built-in template
//! slides), assembles the presentation, and writes a `.pptx` file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use deck_chart::RasterChartBackend;
use deck_core::{build_deck, template, DeckRequest};
use deck_pptx::PptxDocument;

#[derive(Parser)]
#[command(
    name = "deck-gen",
    version,
    about = "Generate a PowerPoint deck from structured slide content"
)]
struct Args {
    /// Slide content JSON file. Omitted: built-in template slides are used.
    input: Option<PathBuf>,

    /// Output .pptx path
    #[arg(short, long, default_value = "slides.pptx")]
    output: PathBuf,

    /// Topic for the title slide; overrides the input file's search phrase
    #[arg(long)]
    topic: Option<String>,

    /// Number of template slides to generate when no input file is given
    #[arg(long, default_value_t = 5)]
    slides: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut request = match &args.input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<DeckRequest>(&raw)
                .with_context(|| format!("invalid slide content in {}", path.display()))?
        }
        None => {
            let topic = args.topic.as_deref().unwrap_or("Business Analysis");
            info!("no input file; generating {} template slides", args.slides);
            DeckRequest::from_slides(template::fallback_slides(topic, args.slides))
        }
    };
    if args.topic.is_some() {
        request.search_phrase = args.topic.clone();
    }

    let charts = RasterChartBackend::default();
    let mut doc = PptxDocument::new();
    let bytes = build_deck(&mut doc, &charts, &request)
        .with_context(|| format!("failed to build deck for '{}'", request.topic()))?;

    fs::write(&args.output, &bytes)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {} ({} bytes)", args.output.display(), bytes.len());
    Ok(())
}
