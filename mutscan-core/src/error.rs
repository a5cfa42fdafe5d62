use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("corrupted sequence: invalid nucleotide '{ch}' at position {pos}")]
    CorruptedSequence { ch: char, pos: usize },

    #[error("undefined mutation type: tag '{tag}' at cell ({row}, {col})")]
    UndefinedMutationType { tag: char, row: usize, col: usize },

    #[error("offset not found: no unique anchor of length >= {anchor_len}")]
    OffsetNotFound { anchor_len: usize },

    #[error("invalid configuration: {msg}")]
    InvalidConfig { msg: String },

    #[error("invalid mutation record: {text:?}")]
    InvalidMutation { text: String },

    #[error("quality trace length mismatch (sequence={seq}, quality={quality})")]
    QualityLengthMismatch { seq: usize, quality: usize },

    #[error("invalid offset {offset} for gene of length {gene_len}")]
    OffsetOutOfRange { offset: isize, gene_len: usize },

    #[error("gene format error at line {line}: {msg}")]
    GeneFormat { msg: &'static str, line: usize },

    #[error("invalid gene sequence at line {line}: {source}")]
    GeneInvalidSequence {
        line: usize,
        #[source]
        source: Box<BioError>,
    },

    #[error("gene list parse error in {path}: {source}")]
    GeneParse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

pub type BioResult<T> = Result<T, BioError>;
