#[macro_use]
mod par;

pub mod align;
pub mod alphabets;
pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod mutation;
pub mod offset;
pub mod seq;
pub mod trim;

pub use analysis::{analyze, analyze_batch, analyze_with_offset, assign_gene, AnalyzedSequence};
pub use config::{AlignmentMode, AnalysisConfig};
pub use error::{BioError, BioResult};
