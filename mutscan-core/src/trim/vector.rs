use crate::error::{BioError, BioResult};
use crate::seq::{DnaSeq, Gene};

/// A read split into cloning-vector flanks and the insert that overlaps the gene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorTrim {
    pub left: DnaSeq,
    pub insert: DnaSeq,
    pub right: DnaSeq,
    /// Gene index of the insert's first base.
    pub gene_start: usize,
}

/// Cut the bases before the gene start (negative offset) and past the gene end.
pub fn trim_vector(observed: &DnaSeq, gene: &Gene, offset: isize) -> BioResult<VectorTrim> {
    let gene_start = offset.max(0) as usize;
    if gene_start >= gene.len() && !gene.is_empty() {
        return Err(BioError::OffsetOutOfRange {
            offset,
            gene_len: gene.len(),
        });
    }
    let left_len = (offset.min(0).unsigned_abs()).min(observed.len());
    let remaining = observed.len() - left_len;
    let keep = remaining.min(gene.len() - gene_start.min(gene.len()));

    let trim = VectorTrim {
        left: observed.slice(0..left_len),
        insert: observed.slice(left_len..left_len + keep),
        right: observed.slice(left_len + keep..observed.len()),
        gene_start,
    };
    log::debug!(
        "vector trim: {} left, {} insert, {} right",
        trim.left.len(),
        trim.insert.len(),
        trim.right.len()
    );
    Ok(trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene(seq: &str) -> Gene {
        Gene::new(7, "g", seq.parse().unwrap())
    }

    #[test]
    fn negative_offset_cuts_left_vector() {
        let observed: DnaSeq = "CCCATGAAA".parse().unwrap();
        let trim = trim_vector(&observed, &gene("ATGAAATTT"), -3).unwrap();
        assert_eq!(trim.left.as_bytes(), b"CCC");
        assert_eq!(trim.insert.as_bytes(), b"ATGAAA");
        assert!(trim.right.is_empty());
        assert_eq!(trim.gene_start, 0);
    }

    #[test]
    fn read_past_gene_end_cuts_right_vector() {
        let observed: DnaSeq = "GGATGAAAGGGTT".parse().unwrap();
        let trim = trim_vector(&observed, &gene("ATGAAAGGG"), -2).unwrap();
        assert_eq!(trim.left.as_bytes(), b"GG");
        assert_eq!(trim.insert.as_bytes(), b"ATGAAAGGG");
        assert_eq!(trim.right.as_bytes(), b"TT");
    }

    #[test]
    fn positive_offset_clips_to_remaining_gene() {
        let observed: DnaSeq = "AAAGGGCC".parse().unwrap();
        let trim = trim_vector(&observed, &gene("ATGAAAGGG"), 3).unwrap();
        assert!(trim.left.is_empty());
        assert_eq!(trim.insert.as_bytes(), b"AAAGGG");
        assert_eq!(trim.right.as_bytes(), b"CC");
        assert_eq!(trim.gene_start, 3);
    }

    #[test]
    fn offset_beyond_gene_is_rejected() {
        let observed: DnaSeq = "AAA".parse().unwrap();
        let err = trim_vector(&observed, &gene("ATG"), 5).unwrap_err();
        assert!(matches!(err, BioError::OffsetOutOfRange { offset: 5, gene_len: 3 }));
    }
}
