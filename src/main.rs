use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{error, info, warn};

use psii2png::discovery;
use psii2png::image_pipeline::{ConversionConfig, PsiiConversionPipeline, TiffCompression};
use psii2png::logger;
use psii2png::metadata::CaptureMetadata;

#[derive(Parser)]
#[command(name = "psii2png")]
#[command(version, about = "PSII sensor capture to PNG/TIFF converter", long_about = None)]
struct Cli {
    /// Frame files, or a single folder containing them
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<PathBuf>,

    /// Capture metadata JSON file
    #[arg(short, long, value_name = "FILE")]
    metadata: Option<PathBuf>,

    /// Output directory (existing, writable)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// Number of histogram bins
    #[arg(long, value_name = "N", default_value = "64")]
    bins: usize,

    /// TIFF compression: none, lzw, or deflate
    #[arg(long, value_name = "METHOD", default_value = "none")]
    compression: String,
}

fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let metadata = match &cli.metadata {
        Some(path) => CaptureMetadata::load(path)
            .with_context(|| format!("loading metadata from {}", path.display()))?,
        None => CaptureMetadata::default(),
    };
    let geometry = metadata.frame_geometry()?;
    if let Some(experiment) = &metadata.experiment {
        info!("Experiment: {}", experiment);
    }
    info!(
        "Frame geometry: {}x{} at {} bits",
        geometry.width, geometry.height, geometry.bits_per_sample
    );

    let sources = discovery::discover_frames(&cli.inputs)?;
    if sources.is_empty() {
        bail!("no sensor frame files found");
    }

    let config = ConversionConfig::builder()
        .histogram_bins(cli.bins)
        .compression(parse_compression(&cli.compression)?)
        .build();
    let pipeline = PsiiConversionPipeline::new(config)?;

    let summary = pipeline.run(&sources, &geometry, &cli.out);

    for frame in summary.frames.iter().filter(|f| !f.succeeded()) {
        warn!(
            "Frame {} ({}) failed: {}",
            frame.sequence,
            frame.stem,
            frame.error.as_deref().unwrap_or("unknown error")
        );
    }
    info!(
        "{}/{} frames converted in {:.2?}",
        summary.succeeded(),
        summary.frames.len(),
        summary.elapsed
    );

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        error!("No frames were converted");
        Ok(ExitCode::FAILURE)
    }
}

fn parse_compression(value: &str) -> anyhow::Result<TiffCompression> {
    match value {
        "none" => Ok(TiffCompression::None),
        "lzw" => Ok(TiffCompression::Lzw),
        "deflate" => Ok(TiffCompression::DeflateBalanced),
        other => bail!("unknown compression method: {other:?}"),
    }
}
