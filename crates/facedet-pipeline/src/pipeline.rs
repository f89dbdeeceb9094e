use std::time::Instant;

use facedet_core::{DetectParams, DetectionResult, GrayImage, Result, TimingInfo};
use facedet_detect::{CascadeDetector, ModelProvider};

use crate::config::PipelineConfig;
use crate::{decode, preprocess};

/// The full detection pipeline: decode → normalize → scan → filter.
pub struct DetectionPipeline {
    detector: CascadeDetector,
    config: PipelineConfig,
}

impl DetectionPipeline {
    /// Build the pipeline from configuration.
    ///
    /// The cascade model stays untouched here; the first request loads it.
    pub fn build(config: PipelineConfig) -> Self {
        let provider = ModelProvider::new(&config.model_path);
        let detector = CascadeDetector::new(provider, config.window_step);
        Self { detector, config }
    }

    /// Whether the one-time model load has happened yet.
    pub fn model_loaded(&self) -> bool {
        self.detector.is_loaded()
    }

    /// Run detection over an uploaded byte buffer.
    pub fn process(
        &self,
        data: &[u8],
        params: &DetectParams,
    ) -> Result<(DetectionResult, TimingInfo)> {
        let total_start = Instant::now();
        let mut timing = TimingInfo::default();

        let decode_start = Instant::now();
        let mut gray = decode::decode_gray(data)?;
        timing.decode_ms = decode_start.elapsed().as_secs_f32() * 1000.0;

        let preprocess_start = Instant::now();
        if self.config.equalize {
            preprocess::equalize(&mut gray);
        }
        timing.preprocess_ms = preprocess_start.elapsed().as_secs_f32() * 1000.0;

        let (width, height) = (gray.width(), gray.height());
        let frame = GrayImage {
            data: gray.into_raw(),
            width,
            height,
        };

        let detect_start = Instant::now();
        let faces = self.detector.detect(&frame, params)?;
        timing.detect_ms = detect_start.elapsed().as_secs_f32() * 1000.0;
        timing.total_ms = total_start.elapsed().as_secs_f32() * 1000.0;

        tracing::info!(
            faces = faces.len(),
            width,
            height,
            total_ms = timing.total_ms,
            decode_ms = timing.decode_ms,
            detect_ms = timing.detect_ms,
            "detection complete"
        );

        Ok((
            DetectionResult {
                faces,
                width,
                height,
            },
            timing,
        ))
    }
}
