//! Turning an edit script into mutation calls while tracking the reading frame.

use crate::align::{overlap_script, EditOperation};
use crate::config::{AlignmentMode, AnalysisConfig};
use crate::error::BioResult;
use crate::mutation::record::{MutationRecord, GAP};
use crate::seq::codon::{translate, translate_codon};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Mutations(Vec<MutationRecord>),
    /// Disagreement kept piling up without a silent change to vouch for the
    /// frame; `position` is where the hard limit was hit.
    ReadingFrameError { position: usize },
}

impl Classification {
    pub fn is_reading_frame_error(&self) -> bool {
        matches!(self, Classification::ReadingFrameError { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Scanning,
    InGapRun,
    Terminated,
}

struct FrameTracker<'a> {
    config: &'a AnalysisConfig,
    state: ScanState,
    /// Net displacement from indels: insertions decrement, deletions increment.
    shift: isize,
    frame_errors: usize,
    gap_run: usize,
    records: Vec<MutationRecord>,
}

impl<'a> FrameTracker<'a> {
    fn new(config: &'a AnalysisConfig) -> Self {
        Self {
            config,
            state: ScanState::Scanning,
            shift: 0,
            frame_errors: 0,
            gap_run: 0,
            records: Vec::new(),
        }
    }

    /// Index in the read of the unit aligned to reference index `k`.
    #[inline]
    fn observed_index(&self, k: usize) -> Option<usize> {
        usize::try_from(k as isize - self.shift).ok()
    }

    fn push_silent(&mut self, record: MutationRecord) {
        self.close_gap_run(record.position);
        self.records.push(record);
        self.frame_errors = 0;
    }

    /// Leave `InGapRun`. In nucleotide mode a run that leaves the net shift
    /// at a multiple of three has put the read back in frame, which clears
    /// the frame-error count the same way a silent change does.
    fn close_gap_run(&mut self, position: usize) {
        if self.state != ScanState::InGapRun {
            return;
        }
        let in_frame = self.config.mode == AlignmentMode::Nucleotide && self.shift % 3 == 0;
        log::debug!(
            "gap run of {} closed at {position}, net shift {}",
            self.gap_run,
            self.shift
        );
        if in_frame {
            self.frame_errors = 0;
        }
        self.gap_run = 0;
        self.state = ScanState::Scanning;
    }

    /// Record a frame-disagreeing call; returns false once the hard limit is hit.
    fn push_error(&mut self, record: MutationRecord) -> bool {
        let is_indel = record.observed == GAP || record.reference == GAP;
        if is_indel {
            self.gap_run += 1;
            self.state = ScanState::InGapRun;
        } else {
            self.close_gap_run(record.position);
        }
        self.records.push(record);

        self.frame_errors += 1;
        if self.frame_errors == self.config.frame_error_warn {
            log::warn!(
                "{} consecutive frame errors at position {}",
                self.frame_errors,
                record.position
            );
        }
        if self.frame_errors >= self.config.frame_error_limit {
            self.state = ScanState::Terminated;
            return false;
        }
        true
    }

    fn finish(self) -> Classification {
        match self.state {
            ScanState::Terminated => Classification::ReadingFrameError {
                position: self.records.last().map(|r| r.position).unwrap_or(0),
            },
            _ => Classification::Mutations(self.records),
        }
    }
}

/// Classify the differences between a codon-aligned reference segment and a read.
///
/// `reference` must start on a codon boundary; `first_codon` is the 1-based
/// residue number of its first codon in the gene. The reference may run past
/// the read's end; whatever the read does not cover is overhang, not deletions.
pub fn classify(
    reference: &[u8],
    observed: &[u8],
    first_codon: usize,
    config: &AnalysisConfig,
) -> BioResult<Classification> {
    let outcome = match config.mode {
        AlignmentMode::AminoAcid => classify_residues(reference, observed, first_codon, config)?,
        AlignmentMode::Nucleotide => {
            classify_nucleotides(reference, observed, first_codon, config)?
        }
    };
    match &outcome {
        Classification::Mutations(records) => {
            log::debug!("classified {} mutations", records.len())
        }
        Classification::ReadingFrameError { position } => {
            log::debug!("reading frame error at {position}")
        }
    }
    Ok(outcome)
}

fn classify_residues(
    reference: &[u8],
    observed: &[u8],
    first_codon: usize,
    config: &AnalysisConfig,
) -> BioResult<Classification> {
    let ref_aa = translate(reference)?;
    let obs_aa = translate(observed)?;
    let ops = overlap_script(&ref_aa, &obs_aa);

    let mut tracker = FrameTracker::new(config);
    let mut cursor = 0usize;

    // Codons in [from, to) are aligned without a residue change; a differing
    // triplet there is a synonymous change.
    let scan_silent = |tracker: &mut FrameTracker<'_>, from: usize, to: usize| -> BioResult<()> {
        for k in from..to {
            let Some(j) = tracker.observed_index(k) else {
                continue;
            };
            let (Some(ref_codon), Some(obs_codon)) = (
                reference.get(3 * k..3 * k + 3),
                observed.get(3 * j..3 * j + 3),
            ) else {
                continue;
            };
            if ref_codon != obs_codon {
                let residue = translate_codon(obs_codon, 3 * j)?;
                if residue == ref_aa[k] {
                    tracker.push_silent(MutationRecord::silent(first_codon + k, ref_aa[k], residue));
                }
            }
        }
        Ok(())
    };

    for op in &ops {
        scan_silent(&mut tracker, cursor, op.position())?;
        let keep_going = match *op {
            EditOperation::Substitution { position, from, to } => {
                cursor = position + 1;
                tracker.push_error(MutationRecord::substitution(first_codon + position, from, to))
            }
            EditOperation::Insertion { position, inserted } => {
                cursor = position;
                tracker.shift -= 1;
                tracker.push_error(MutationRecord::insertion(first_codon + position, inserted))
            }
            EditOperation::Deletion { position, deleted } => {
                cursor = position + 1;
                tracker.shift += 1;
                tracker.push_error(MutationRecord::deletion(first_codon + position, deleted))
            }
        };
        if !keep_going {
            return Ok(tracker.finish());
        }
    }
    scan_silent(&mut tracker, cursor, ref_aa.len())?;

    Ok(tracker.finish())
}

fn classify_nucleotides(
    reference: &[u8],
    observed: &[u8],
    first_codon: usize,
    config: &AnalysisConfig,
) -> BioResult<Classification> {
    // Validates both strands up front; the residues themselves are used below.
    let ref_aa = translate(reference)?;
    translate(observed)?;

    let ops = overlap_script(reference, observed);

    let first_base = (first_codon.max(1) - 1) * 3 + 1;
    let mut tracker = FrameTracker::new(config);

    for op in &ops {
        let keep_going = match *op {
            EditOperation::Substitution { position, from, to } => {
                let k = position / 3;
                let synonymous = match (ref_aa.get(k), tracker.observed_index(3 * k)) {
                    (Some(&residue), Some(j)) if tracker.shift % 3 == 0 => observed
                        .get(j..j + 3)
                        .map(|codon| translate_codon(codon, j))
                        .transpose()?
                        == Some(residue),
                    _ => false,
                };
                let record_pos = first_base + position;
                if synonymous {
                    tracker.push_silent(MutationRecord::silent(record_pos, from, to));
                    true
                } else {
                    tracker.push_error(MutationRecord::substitution(record_pos, from, to))
                }
            }
            EditOperation::Insertion { position, inserted } => {
                tracker.shift -= 1;
                tracker.push_error(MutationRecord::insertion(first_base + position, inserted))
            }
            EditOperation::Deletion { position, deleted } => {
                tracker.shift += 1;
                tracker.push_error(MutationRecord::deletion(first_base + position, deleted))
            }
        };
        if !keep_going {
            break;
        }
    }

    Ok(tracker.finish())
}
