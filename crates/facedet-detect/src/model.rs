use std::io::Cursor;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use rustface::Model;

use facedet_core::{DetectError, Result};

/// Default location of the SeetaFace frontal-face model, relative to the
/// working directory. See `models/README.md`.
pub const DEFAULT_MODEL_PATH: &str = "models/seeta_fd_frontal_v1.0.bin";

/// Lazily-initialized shared handle to the parsed cascade model.
///
/// The model file is not touched until the first detection; the parsed model
/// is then cached for the remainder of the process lifetime. Concurrent
/// first callers serialize on the cell, and a failed load leaves it empty so
/// the next caller retries.
pub struct ModelProvider {
    path: PathBuf,
    model: OnceCell<Model>,
}

impl ModelProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: OnceCell::new(),
        }
    }

    /// Path the model will be (or was) loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the one-time load has already happened.
    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// The parsed model, loading it on first call.
    pub fn get(&self) -> Result<&Model> {
        self.model.get_or_try_init(|| read_model_file(&self.path))
    }
}

fn read_model_file(path: &Path) -> Result<Model> {
    if !path.exists() {
        return Err(DetectError::ModelMissing(path.to_path_buf()));
    }
    let data = std::fs::read(path)?;
    let model = rustface::read_model(Cursor::new(data))
        .map_err(|e| DetectError::ModelLoad(e.to_string()))?;
    tracing::info!(path = %path.display(), "loaded SeetaFace cascade model");
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_reports_path() {
        let provider = ModelProvider::new("does/not/exist.bin");
        assert!(!provider.is_loaded());

        let err = provider.get().err().expect("load must fail");
        match err {
            DetectError::ModelMissing(p) => assert_eq!(p, Path::new("does/not/exist.bin")),
            other => panic!("expected ModelMissing, got {other}"),
        }

        // A failed load keeps the cell empty for the next attempt.
        assert!(!provider.is_loaded());
    }

    #[test]
    fn unparseable_model_is_a_load_error() {
        let dir = std::env::temp_dir().join("facedet-model-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("bogus_model.bin");
        std::fs::write(&path, b"not a seetaface model").expect("write");

        let provider = ModelProvider::new(&path);
        let err = provider.get().err().expect("load must fail");
        assert!(matches!(err, DetectError::ModelLoad(_)), "got {err}");
    }
}
