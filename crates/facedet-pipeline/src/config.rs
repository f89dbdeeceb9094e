use serde::{Deserialize, Serialize};

use facedet_detect::DEFAULT_MODEL_PATH;

/// Runtime configuration for the detection pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Path to the SeetaFace cascade model file. Not read until the first
    /// detection request.
    pub model_path: String,
    /// Sliding-window step of the cascade scan, in pixels.
    pub window_step: u32,
    /// Whether to histogram-equalize frames before scanning.
    pub equalize: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            window_step: 4,
            equalize: true,
        }
    }
}
