pub mod detector;
pub mod model;
pub mod postprocess;

pub use detector::CascadeDetector;
pub use model::{ModelProvider, DEFAULT_MODEL_PATH};
pub use postprocess::{filter_faces, MIN_FACE_SIDE};
