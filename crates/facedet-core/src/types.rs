use serde::{Deserialize, Serialize};

/// One detected face: an axis-aligned box in image pixel coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// The cascade emits no calibrated confidence; always 1.0.
    pub score: f32,
}

impl FaceBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            score: 1.0,
        }
    }
}

/// Response payload for a detection request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub faces: Vec<FaceBox>,
    pub width: u32,
    pub height: u32,
}

/// Caller-tunable scan parameters, read from the query string.
///
/// Defaults match the service contract: `scale=1.1`, `neighbors=5`, `min=30`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectParams {
    /// Geometric step between successive detection window sizes. Larger
    /// values scan faster but may miss faces.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Overlapping raw detections required before a region is accepted.
    #[serde(default = "default_neighbors")]
    pub neighbors: u32,
    /// Minimum face side length in pixels; smaller candidates are discarded
    /// by the detector itself.
    #[serde(default = "default_min_size", rename = "min")]
    pub min_size: u32,
}

fn default_scale() -> f64 {
    1.1
}

fn default_neighbors() -> u32 {
    5
}

fn default_min_size() -> u32 {
    30
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            neighbors: default_neighbors(),
            min_size: default_min_size(),
        }
    }
}

/// Row-major 8-bit grayscale frame, normalized and ready for the cascade.
#[derive(Debug, Clone)]
pub struct GrayImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Timing information for pipeline stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingInfo {
    pub decode_ms: f32,
    pub preprocess_ms: f32,
    pub detect_ms: f32,
    pub total_ms: f32,
}
