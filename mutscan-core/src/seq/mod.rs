pub mod codon;
pub mod dna;
pub mod gene;
pub mod quality;

pub use codon::{translate, translate_codon};
pub use dna::DnaSeq;
pub use gene::Gene;
pub use quality::QualityTrace;
