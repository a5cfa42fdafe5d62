pub mod quality;
pub mod vector;

pub use quality::quality_clip;
pub use vector::{trim_vector, VectorTrim};
