//! Locating a read inside its reference gene by unique anchor search.

use crate::config::AnalysisConfig;
use crate::error::{BioError, BioResult};
use crate::seq::{DnaSeq, Gene};

/// A unique anchor match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorHit {
    /// Reference index of the read's first base; negative when the read starts before the gene.
    pub offset: isize,
    pub anchor_start: usize,
    pub anchor_len: usize,
}

/// Search for a unique anchor of `observed` in `reference`.
///
/// The anchor starts as the first third of the read. On a miss it slides
/// forward by its own length while a full anchor still fits, then shrinks
/// by one base and restarts at the beginning of the read. Once it would
/// fall below `min_anchor_len` the search gives up with `OffsetNotFound`.
pub fn find_anchor(
    observed: &[u8],
    reference: &DnaSeq,
    min_anchor_len: usize,
) -> BioResult<AnchorHit> {
    let min_anchor_len = min_anchor_len.max(1);
    let len = observed.len();
    let mut anchor_len = len / 3;
    if anchor_len < min_anchor_len {
        log::warn!(
            "read of {len} bases gives a {anchor_len}-base anchor, below the {min_anchor_len}-base minimum"
        );
    }

    let mut start = 0usize;
    while anchor_len >= min_anchor_len {
        let anchor = &observed[start..start + anchor_len];
        if let Some(idx) = reference.find_unique(anchor) {
            let offset = idx as isize - start as isize;
            log::debug!("anchor of {anchor_len} bases at read position {start} gives offset {offset}");
            return Ok(AnchorHit {
                offset,
                anchor_start: start,
                anchor_len,
            });
        }
        if start + 2 * anchor_len <= len {
            start += anchor_len;
        } else {
            anchor_len -= 1;
            start = 0;
        }
    }

    log::warn!("anchor search exhausted at {min_anchor_len} bases; no unique offset");
    Err(BioError::OffsetNotFound {
        anchor_len: min_anchor_len,
    })
}

pub fn find_offset(observed: &DnaSeq, gene: &Gene, config: &AnalysisConfig) -> BioResult<isize> {
    find_anchor(observed.as_bytes(), gene.seq(), config.min_anchor_len).map(|hit| hit.offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene(seq: &str) -> Gene {
        Gene::new(1, "test", seq.parse().unwrap())
    }

    #[test]
    fn slides_past_vector_residue() {
        let observed: DnaSeq = "CCCATGAAA".parse().unwrap();
        let reference: DnaSeq = "ATGAAATTT".parse().unwrap();
        let hit = find_anchor(observed.as_bytes(), &reference, 3).unwrap();
        assert_eq!(hit.offset, -3);
        assert_eq!(hit.anchor_start, 3);
        assert_eq!(hit.anchor_len, 3);
    }

    #[test]
    fn read_inside_gene_has_positive_offset() {
        let g = gene("ATGGCTAGCTTAGGCATCCGATTACGGAGCTTACCGATGCA");
        let observed: DnaSeq = "GCATCCGATTACGGAGCTTACC".parse().unwrap();
        let cfg = AnalysisConfig::default().with_min_anchor_len(5);
        assert_eq!(find_offset(&observed, &g, &cfg).unwrap(), 13);
    }

    #[test]
    fn repeated_anchor_is_rejected() {
        // "ACGT" occurs twice, so the four-base anchor misses and shrinks.
        let reference: DnaSeq = "ACGTTACGTG".parse().unwrap();
        let observed = b"ACGTCCCCCCCC";
        let err = find_anchor(observed, &reference, 4).unwrap_err();
        assert!(matches!(err, BioError::OffsetNotFound { anchor_len: 4 }));

        let err = find_anchor(observed, &reference, 3).unwrap_err();
        assert!(matches!(err, BioError::OffsetNotFound { anchor_len: 3 }));
    }

    #[test]
    fn shrunken_anchor_finds_unique_prefix() {
        let reference: DnaSeq = "GGGTTACAAA".parse().unwrap();
        // First anchor "TTACX" never matches; shrinking to "TTAC" does.
        let observed = b"TTACGCCCCCCCCCC";
        let hit = find_anchor(observed, &reference, 4).unwrap();
        assert_eq!(hit.anchor_len, 4);
        assert_eq!(hit.offset, 3);
    }

    #[test]
    fn short_read_is_not_found() {
        let observed: DnaSeq = "ATGAAA".parse().unwrap();
        let g = gene("ATGAAATTTGGG");
        let err = find_offset(&observed, &g, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, BioError::OffsetNotFound { anchor_len: 9 }));
    }
}
