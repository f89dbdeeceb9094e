use std::path::PathBuf;

use clap::{Parser, Subcommand};

use facedet_core::{DetectParams, Result};
use facedet_pipeline::DetectionPipeline;

#[derive(Parser)]
#[command(name = "facedet", about = "Face detection service — cascade face boxes over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to pipeline config file (JSON).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the cascade model path.
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server.
    Serve {
        /// Host to bind to. Loopback-only unless overridden.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to.
        #[arg(long, env = "PORT", default_value = "5000")]
        port: u16,
    },
    /// Detect faces in a single image file and print the boxes.
    Detect {
        /// Input image path.
        #[arg(required = true)]
        input: PathBuf,
        /// Scale step between successive detection window sizes.
        #[arg(long, default_value = "1.1")]
        scale: f64,
        /// Overlapping detections required to accept a region.
        #[arg(long, default_value = "5")]
        neighbors: u32,
        /// Minimum face side length in pixels.
        #[arg(long, default_value = "30")]
        min: u32,
        /// Output format.
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run the pipeline over a single file via CLI.
pub fn detect_file(
    pipeline: &DetectionPipeline,
    path: &PathBuf,
    params: &DetectParams,
    format: &OutputFormat,
) -> Result<()> {
    let data = std::fs::read(path)?;
    let (result, timing) = pipeline.process(&data, params)?;

    match format {
        OutputFormat::Text => {
            if result.faces.is_empty() {
                println!("no faces found");
            }
            for (i, face) in result.faces.iter().enumerate() {
                println!(
                    "face {}: x={} y={} width={} height={}",
                    i + 1,
                    face.x,
                    face.y,
                    face.width,
                    face.height
                );
            }
            eprintln!(
                "\n[{}x{} | {:.1}ms total | decode:{:.1}ms preproc:{:.1}ms detect:{:.1}ms]",
                result.width,
                result.height,
                timing.total_ms,
                timing.decode_ms,
                timing.preprocess_ms,
                timing.detect_ms
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
    }

    Ok(())
}
