use crate::error::{BioError, BioResult};

/// Granularity at which the reference and the read are aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AlignmentMode {
    /// Align translated residues; positions are 1-based codon numbers.
    #[default]
    AminoAcid,
    /// Align raw bases; positions are 1-based nucleotide numbers.
    Nucleotide,
}

/// Thresholds shared by the offset search, the trimmer and the classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Shortest anchor the offset search will try before giving up.
    pub min_anchor_len: usize,
    /// Consecutive below-average bases that end the quality scan.
    pub quality_run_limit: usize,
    /// Frame-error count that triggers a warning.
    pub frame_error_warn: usize,
    /// Frame-error count that aborts classification as a reading-frame error.
    pub frame_error_limit: usize,
    pub mode: AlignmentMode,
    /// Retry the offset search on the reverse complement of the read.
    pub try_reverse_complement: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_anchor_len: 9,
            quality_run_limit: 5,
            frame_error_warn: 10,
            frame_error_limit: 100,
            mode: AlignmentMode::AminoAcid,
            try_reverse_complement: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_min_anchor_len(mut self, len: usize) -> Self {
        self.min_anchor_len = len;
        self
    }

    pub fn with_quality_run_limit(mut self, limit: usize) -> Self {
        self.quality_run_limit = limit;
        self
    }

    pub fn with_frame_error_limits(mut self, warn: usize, limit: usize) -> Self {
        self.frame_error_warn = warn;
        self.frame_error_limit = limit;
        self
    }

    pub fn with_mode(mut self, mode: AlignmentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_reverse_complement(mut self, enabled: bool) -> Self {
        self.try_reverse_complement = enabled;
        self
    }

    pub fn validate(&self) -> BioResult<()> {
        if self.min_anchor_len == 0 {
            return Err(BioError::InvalidConfig {
                msg: "min_anchor_len must be > 0".to_string(),
            });
        }
        if self.quality_run_limit == 0 {
            return Err(BioError::InvalidConfig {
                msg: "quality_run_limit must be > 0".to_string(),
            });
        }
        if self.frame_error_limit == 0 {
            return Err(BioError::InvalidConfig {
                msg: "frame_error_limit must be > 0".to_string(),
            });
        }
        if self.frame_error_warn > self.frame_error_limit {
            return Err(BioError::InvalidConfig {
                msg: format!(
                    "frame_error_warn ({}) must not exceed frame_error_limit ({})",
                    self.frame_error_warn, self.frame_error_limit
                ),
            });
        }
        Ok(())
    }
}
