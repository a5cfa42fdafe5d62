//! The per-read pipeline: locate, trim vector, trim quality, classify.

use crate::config::AnalysisConfig;
use crate::error::{BioError, BioResult};
use crate::mutation::{classify, Classification, MutationRecord};
use crate::offset::find_offset;
use crate::seq::{DnaSeq, Gene, QualityTrace};
use crate::trim::{quality_clip, trim_vector};

/// One sequencing read and everything the pipeline learns about it.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzedSequence {
    pub name: Box<str>,
    /// The read as analyzed; reverse-complemented when it matched the reverse strand.
    pub seq: DnaSeq,
    pub quality: QualityTrace,
    pub reversed: bool,
    pub gene_id: Option<u32>,
    pub offset: Option<isize>,
    pub left_vector: DnaSeq,
    pub right_vector: DnaSeq,
    pub trimmed: DnaSeq,
    /// Gene index of the first base of `trimmed`.
    pub gene_start: usize,
    pub mutations: Vec<MutationRecord>,
    pub reading_frame_error: bool,
    pub average_quality: f64,
    pub trim_percentage: f64,
}

impl AnalyzedSequence {
    /// `quality` may be empty, which disables quality trimming.
    pub fn new(name: impl Into<Box<str>>, seq: DnaSeq, quality: QualityTrace) -> BioResult<Self> {
        if !quality.is_empty() && quality.len() != seq.len() {
            return Err(BioError::QualityLengthMismatch {
                seq: seq.len(),
                quality: quality.len(),
            });
        }
        let average_quality = quality.average();
        Ok(Self {
            name: name.into(),
            trimmed: seq.clone(),
            seq,
            quality,
            reversed: false,
            gene_id: None,
            offset: None,
            left_vector: DnaSeq::default(),
            right_vector: DnaSeq::default(),
            gene_start: 0,
            mutations: Vec::new(),
            reading_frame_error: false,
            average_quality,
            trim_percentage: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Find the read's offset in `gene`, falling back to its reverse complement.
    pub fn locate(&mut self, gene: &Gene, config: &AnalysisConfig) -> BioResult<isize> {
        match find_offset(&self.seq, gene, config) {
            Ok(offset) => Ok(offset),
            Err(BioError::OffsetNotFound { .. }) if config.try_reverse_complement => {
                let rc = self.seq.reverse_complement()?;
                let offset = find_offset(&rc, gene, config)?;
                log::warn!("{}: matched {} on the reverse strand", self.name, gene.name());
                self.seq = rc;
                self.trimmed = self.seq.clone();
                self.quality = self.quality.reversed();
                self.reversed = true;
                Ok(offset)
            }
            Err(err) => Err(err),
        }
    }

    pub fn trim_vector(&mut self, gene: &Gene, offset: isize) -> BioResult<()> {
        let trim = trim_vector(&self.seq, gene, offset)?;
        self.offset = Some(offset);
        self.gene_id = Some(gene.id);
        self.left_vector = trim.left;
        self.right_vector = trim.right;
        self.trimmed = trim.insert;
        self.gene_start = trim.gene_start;
        self.update_trim_percentage();
        Ok(())
    }

    /// Clip the low-quality tail of the current insert.
    pub fn trim_quality(&mut self, config: &AnalysisConfig) {
        if self.quality.is_empty() {
            return;
        }
        let start = self.left_vector.len();
        let scores = &self.quality.as_slice()[start..start + self.trimmed.len()];
        let clip = quality_clip(scores, self.average_quality, config.quality_run_limit);
        if clip < self.trimmed.len() {
            log::debug!(
                "{}: quality clip at {clip} of {} bases",
                self.name,
                self.trimmed.len()
            );
            self.trimmed = self.trimmed.slice(0..clip);
        }
        self.update_trim_percentage();
    }

    /// Align the insert against `gene` and record the calls.
    pub fn classify(&mut self, gene: &Gene, config: &AnalysisConfig) -> BioResult<()> {
        let frame_pad = (3 - self.gene_start % 3) % 3;
        let ref_start = self.gene_start + frame_pad;
        let observed = self.trimmed.as_bytes().get(frame_pad..).unwrap_or(&[]);
        // Rest of the gene; the classifier treats what the read does not reach as overhang.
        let reference = gene.seq().as_bytes().get(ref_start..).unwrap_or(&[]);

        match classify(reference, observed, ref_start / 3 + 1, config)? {
            Classification::Mutations(records) => {
                self.mutations = records;
                self.reading_frame_error = false;
            }
            Classification::ReadingFrameError { position } => {
                log::warn!("{}: reading frame error at {position}", self.name);
                self.mutations.clear();
                self.reading_frame_error = true;
            }
        }
        Ok(())
    }

    pub fn mutation_strings(&self) -> Vec<String> {
        self.mutations.iter().map(|m| m.to_string()).collect()
    }

    fn update_trim_percentage(&mut self) {
        self.trim_percentage = if self.seq.is_empty() {
            0.0
        } else {
            (self.seq.len() - self.trimmed.len()) as f64 * 100.0 / self.seq.len() as f64
        };
    }

    fn run(&mut self, gene: &Gene, offset: isize, config: &AnalysisConfig) -> BioResult<()> {
        self.trim_vector(gene, offset)?;
        self.trim_quality(config);
        self.classify(gene, config)
    }
}

pub fn analyze(
    mut read: AnalyzedSequence,
    gene: &Gene,
    config: &AnalysisConfig,
) -> BioResult<AnalyzedSequence> {
    config.validate()?;
    let offset = read.locate(gene, config)?;
    read.run(gene, offset, config)?;
    Ok(read)
}

/// Run the pipeline with a caller-assigned offset, skipping the anchor search.
pub fn analyze_with_offset(
    mut read: AnalyzedSequence,
    gene: &Gene,
    offset: isize,
    config: &AnalysisConfig,
) -> BioResult<AnalyzedSequence> {
    config.validate()?;
    read.run(gene, offset, config)?;
    Ok(read)
}

/// Analyze independent reads against one gene; one result per read, in input order.
pub fn analyze_batch(
    reads: &[AnalyzedSequence],
    gene: &Gene,
    config: &AnalysisConfig,
) -> Vec<BioResult<AnalyzedSequence>> {
    par_map!(reads, |read: &AnalyzedSequence| analyze(
        read.clone(),
        gene,
        config
    ))
}

/// First gene (in list order) that holds a unique anchor for `seq`, with the offset found.
pub fn assign_gene<'g>(
    seq: &DnaSeq,
    genes: &'g [Gene],
    config: &AnalysisConfig,
) -> Option<(&'g Gene, isize)> {
    let hit = par_find_map_first!(genes, |gene: &Gene| find_offset(seq, gene, config).ok());
    hit.map(|(i, offset)| (&genes[i], offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene() -> Gene {
        Gene::new(3, "toy", "ATGAAATTTGGGCCCTAA".parse().unwrap())
    }

    #[test]
    fn quality_length_must_match() {
        let seq: DnaSeq = "ACGT".parse().unwrap();
        let err = AnalyzedSequence::new("r", seq, QualityTrace::new(vec![1, 2])).unwrap_err();
        assert!(matches!(
            err,
            BioError::QualityLengthMismatch { seq: 4, quality: 2 }
        ));
    }

    #[test]
    fn manual_offset_with_left_vector() {
        let seq: DnaSeq = "GGATGAAGTTTGGGCCC".parse().unwrap();
        let read = AnalyzedSequence::new("r", seq, QualityTrace::default()).unwrap();
        let out = analyze_with_offset(read, &gene(), -2, &AnalysisConfig::default()).unwrap();
        assert_eq!(out.left_vector.as_bytes(), b"GG");
        assert_eq!(out.trimmed.as_bytes(), b"ATGAAGTTTGGGCCC");
        assert_eq!(out.mutation_strings(), vec!["K2K"]);
        assert_eq!(out.gene_id, Some(3));
        assert!(!out.reading_frame_error);
    }

    #[test]
    fn off_frame_start_is_padded_to_codon() {
        // Read starts at gene base 4, inside codon 2; first full codon is TTT (codon 3).
        let seq: DnaSeq = "AATTAGGGCCC".parse().unwrap();
        let read = AnalyzedSequence::new("r", seq, QualityTrace::default()).unwrap();
        let out = analyze_with_offset(read, &gene(), 4, &AnalysisConfig::default()).unwrap();
        // TTA (L) replaces TTT (F) at residue 3.
        assert_eq!(out.mutation_strings(), vec!["L3F"]);
    }

    #[test]
    fn in_frame_deletion_has_no_trailing_insertion() {
        let gene = Gene::new(3, "toy", "ATGGCAGGCTTTCCCAAA".parse().unwrap());
        let seq: DnaSeq = "ATGGGCTTTCCCAAA".parse().unwrap();
        let read = AnalyzedSequence::new("r", seq, QualityTrace::default()).unwrap();
        let out = analyze_with_offset(read, &gene, 0, &AnalysisConfig::default()).unwrap();
        assert_eq!(out.mutation_strings(), vec!["-1A2"]);
        assert!(!out.reading_frame_error);
    }

    #[test]
    fn trim_percentage_counts_all_cuts() {
        let seq: DnaSeq = "GGATGAAATTTGGGCCCTAACC".parse().unwrap();
        let quality = QualityTrace::new(vec![40; 22]);
        let read = AnalyzedSequence::new("r", seq, quality).unwrap();
        let out = analyze_with_offset(read, &gene(), -2, &AnalysisConfig::default()).unwrap();
        assert_eq!(out.right_vector.as_bytes(), b"CC");
        assert!((out.trim_percentage - 4.0 * 100.0 / 22.0).abs() < 1e-10);
    }
}
