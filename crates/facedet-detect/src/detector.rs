use facedet_core::{DetectParams, FaceBox, GrayImage, Result};

use crate::model::ModelProvider;
use crate::postprocess::{self, MIN_FACE_SIDE};

/// Cascade face scan over a normalized grayscale frame.
///
/// The parsed model is shared across requests; each scan builds its own
/// detector from a clone of it, since the scanner itself is stateful.
pub struct CascadeDetector {
    provider: ModelProvider,
    window_step: u32,
}

impl CascadeDetector {
    pub fn new(provider: ModelProvider, window_step: u32) -> Self {
        Self {
            provider,
            window_step,
        }
    }

    /// Whether the one-time model load has happened yet.
    pub fn is_loaded(&self) -> bool {
        self.provider.is_loaded()
    }

    /// Scan `frame` and return sanity-filtered face boxes.
    pub fn detect(&self, frame: &GrayImage, params: &DetectParams) -> Result<Vec<FaceBox>> {
        let model = self.provider.get()?;

        let mut detector = rustface::create_detector_with_model(model.clone());
        detector.set_min_face_size(params.min_size.max(MIN_FACE_SIDE));
        detector.set_score_thresh(score_threshold(params.neighbors));
        detector.set_pyramid_scale_factor(pyramid_scale(params.scale));
        detector.set_slide_window_step(self.window_step, self.window_step);

        let image = rustface::ImageData::new(&frame.data, frame.width, frame.height);
        let raw = detector.detect(&image);

        tracing::debug!(candidates = raw.len(), "cascade scan complete");

        let candidates = raw
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox::new(
                    bbox.x().max(0) as u32,
                    bbox.y().max(0) as u32,
                    bbox.width().max(0) as u32,
                    bbox.height().max(0) as u32,
                )
            })
            .collect();

        Ok(postprocess::filter_faces(
            candidates,
            frame.width,
            frame.height,
        ))
    }
}

/// Haar-style scale step (≥ 1) to the engine's pyramid factor (< 1).
fn pyramid_scale(scale: f64) -> f32 {
    if !scale.is_finite() || scale <= 0.0 {
        return 0.8; // engine default when the step is nonsense
    }
    (1.0 / scale).clamp(0.1, 0.99) as f32
}

/// Neighbor-agreement count to the engine's score threshold. The default of
/// 5 neighbors lands on 2.0, the engine's own default threshold.
fn score_threshold(neighbors: u32) -> f64 {
    f64::from(neighbors) * 0.4
}
